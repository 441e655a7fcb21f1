//! Single-step iteration rules for escape-time fractals.

use quadbrot_core::{Complex, StepRule};

/// One application of an escape-time rule: `z' = step(z, c)`.
///
/// Rules must be pure; the engine calls them from several threads at once.
pub trait IterationStep: dyn_clone::DynClone + Send + Sync {
    fn step(&self, z: Complex, c: Complex) -> Complex;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

dyn_clone::clone_trait_object!(IterationStep);

impl IterationStep for Box<dyn IterationStep> {
    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        (**self).step(z, c)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// z² + c
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quadratic;

impl IterationStep for Quadratic {
    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z.square().add(&c)
    }

    fn name(&self) -> &'static str {
        "quadratic"
    }
}

/// z³ + c
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cubic;

impl IterationStep for Cubic {
    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z.square().mul(&z).add(&c)
    }

    fn name(&self) -> &'static str {
        "cubic"
    }
}

/// Rule backed by a closure.
#[derive(Clone)]
pub struct FnStep<F> {
    name: &'static str,
    f: F,
}

impl<F> FnStep<F>
where
    F: Fn(Complex, Complex) -> Complex + Clone + Send + Sync,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> IterationStep for FnStep<F>
where
    F: Fn(Complex, Complex) -> Complex + Clone + Send + Sync,
{
    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        (self.f)(z, c)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Create the built-in rule selected in a configuration.
pub fn build_rule(rule: StepRule) -> Box<dyn IterationStep> {
    match rule {
        StepRule::Quadratic => Box::new(Quadratic),
        StepRule::Cubic => Box::new(Cubic),
    }
}
