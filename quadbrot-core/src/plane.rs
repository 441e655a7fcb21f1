use crate::{Complex, Vector4};

/// An affine plane in 4-space with its own 2D coordinate system.
///
/// The plane is the set `{ origin + x * x_unit + y * y_unit }`. The two axis
/// seeds given to [`Plane::new`] are orthonormalized once (Gram-Schmidt):
/// `x_unit` is the normalized x seed, `y_unit` is the part of the y seed
/// orthogonal to `x_unit`, normalized.
///
/// A zero x seed, or a y seed parallel to it, is not caught: the affected
/// axis has NaN components and so does every point returned by [`Plane::at`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    origin: Vector4,
    x_unit: Vector4,
    y_unit: Vector4,
}

impl Plane {
    pub fn new(origin: Vector4, x_seed: Vector4, y_seed: Vector4) -> Self {
        let x_unit = x_seed.normalized();
        let y_unit = y_seed.rejection_from(&x_unit).normalized();
        Self {
            origin,
            x_unit,
            y_unit,
        }
    }

    /// The plane of constants `c` with `z0 = 0`: the Mandelbrot set.
    pub fn mandelbrot() -> Self {
        Self::new(Vector4::ZERO, Vector4::basis(0), Vector4::basis(1))
    }

    /// The plane of start values `z0` for a fixed constant `c`: the Julia set of `c`.
    pub fn julia(c: Complex) -> Self {
        Self::new(
            Vector4::new(c.re, c.im, 0.0, 0.0),
            Vector4::basis(2),
            Vector4::basis(3),
        )
    }

    /// Point at local coordinates `(x, y)`.
    #[inline]
    pub fn at(&self, x: f64, y: f64) -> Vector4 {
        self.origin + self.x_unit * x + self.y_unit * y
    }

    pub fn origin(&self) -> Vector4 {
        self.origin
    }

    pub fn x_unit(&self) -> Vector4 {
        self.x_unit
    }

    pub fn y_unit(&self) -> Vector4 {
        self.y_unit
    }

    /// Whether construction left an axis with non-finite components.
    pub fn is_degenerate(&self) -> bool {
        !(self.x_unit.is_finite() && self.y_unit.is_finite())
    }
}
