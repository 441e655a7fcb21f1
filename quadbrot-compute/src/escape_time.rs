use crate::step_rule::{IterationStep, Quadratic};
use quadbrot_core::{Complex, Vector4};

/// Returned by [`EscapeTimeEngine::count_iterations`] when the orbit stays
/// bounded for the whole iteration budget.
pub const DID_NOT_ESCAPE: i32 = -1;

/// Orbits whose modulus exceeds this are considered escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Escape-time iteration over 4D sample points.
///
/// A point is read as two complex numbers: `coords[0..2]` is the constant
/// `c` and `coords[2..4]` the start value `z0`. The modulus test happens
/// before each step, so a point whose `z0` is already outside the escape
/// radius reports 0.
#[derive(Clone, Debug)]
pub struct EscapeTimeEngine<S = Quadratic> {
    max_iterations: u32,
    rule: S,
}

impl EscapeTimeEngine<Quadratic> {
    pub fn new(max_iterations: u32) -> Self {
        Self::with_rule(max_iterations, Quadratic)
    }
}

impl<S: IterationStep> EscapeTimeEngine<S> {
    pub fn with_rule(max_iterations: u32, rule: S) -> Self {
        Self {
            max_iterations,
            rule,
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn rule(&self) -> &S {
        &self.rule
    }

    /// Number of completed steps before `|z| > 2`, or [`DID_NOT_ESCAPE`].
    ///
    /// The result is always in `0..max_iterations` or `-1`. NaN orbits never
    /// compare greater than the radius, so they run to the bound and report
    /// `-1`.
    pub fn count_iterations(&self, point: &Vector4) -> i32 {
        let c = Complex::from_pair(point, 0);
        let mut z = Complex::from_pair(point, 2);

        // Counts are reported as i32; clamp so the cast below cannot wrap.
        let bound = self.max_iterations.min(i32::MAX as u32);
        for it in 0..bound {
            if z.abs() > ESCAPE_RADIUS {
                return it as i32;
            }
            z = self.rule.step(z, c);
        }
        DID_NOT_ESCAPE
    }
}
