use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A point or direction in 4-dimensional real space.
///
/// Components are read as two complex numbers by the escape-time engine:
/// `coords[0..2]` is the constant `c`, `coords[2..4]` is the start value `z0`.
///
/// Every operation returns a new vector. Non-finite components are not
/// rejected; they propagate through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector4 {
    pub coords: [f64; 4],
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            coords: [a, b, c, d],
        }
    }

    /// Unit vector along axis `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    pub fn basis(i: usize) -> Self {
        let mut coords = [0.0; 4];
        coords[i] = 1.0;
        Self { coords }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let [a, b, c, d] = self.coords;
        let [e, g, h, k] = other.coords;
        Self::new(f(a, e), f(b, g), f(c, h), f(d, k))
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let [a, b, c, d] = self.coords;
        Self::new(f(a), f(b), f(c), f(d))
    }

    /// Scalar product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Vector in the same direction with length one.
    ///
    /// The zero vector has no direction; normalizing it yields NaN components.
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    /// Component of `self` parallel to `other`.
    pub fn projection_on(&self, other: &Self) -> Self {
        let unit = other.normalized();
        unit * self.dot(&unit)
    }

    /// Component of `self` orthogonal to `other`.
    pub fn rejection_from(&self, other: &Self) -> Self {
        *self - self.projection_on(other)
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl Add for Vector4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(&other, |a, b| a + b)
    }
}

impl Sub for Vector4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_with(&other, |a, b| a - b)
    }
}

impl Mul<f64> for Vector4 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.map(|a| a * factor)
    }
}

impl Div<f64> for Vector4 {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        self.map(|a| a / divisor)
    }
}
