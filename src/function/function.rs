/// Anything that can be evaluated at a real `x`.
///
/// Implementations may return `NaN` for inputs where they are undefined; that
/// is a value, not a fault. Domain borders are informational and default to
/// the whole real line.
pub trait Function: Send + Sync {
    fn value(&self, x: f64) -> f64;

    fn left_domain_border(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn right_domain_border(&self) -> f64 {
        f64::INFINITY
    }
}

/// Wraps a plain closure so it can be tabulated or combined.
pub struct FnFunction<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> FnFunction<F> {
        FnFunction { f }
    }
}

impl<F> Function for FnFunction<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}
