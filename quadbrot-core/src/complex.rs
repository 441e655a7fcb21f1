//! Minimal f64 complex number used by the iteration rules.

use crate::Vector4;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Read components `i` and `i + 1` of a 4-vector as (re, im).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn from_pair(v: &Vector4, i: usize) -> Self {
        Self {
            re: v.coords[i],
            im: v.coords[i + 1],
        }
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    #[inline]
    pub fn square(&self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Modulus |z|.
    ///
    /// `libm::hypot` keeps the result identical across platforms, which the
    /// escape test relies on for reproducible images. NaN input gives NaN.
    #[inline]
    pub fn abs(&self) -> f64 {
        libm::hypot(self.re, self.im)
    }
}
