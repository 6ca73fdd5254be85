use crate::function::function::Function;

/// Logarithm with an arbitrary base, defined on `[0, +inf)`.
///
/// Follows float semantics at the edges: `-inf` at zero, `NaN` for negative
/// inputs.
#[derive(Debug, Clone, Copy)]
pub struct Log {
    base: f64
}

impl Log {
    pub fn new(base: f64) -> Log {
        Log { base }
    }

    pub fn natural() -> Log {
        Log::new(std::f64::consts::E)
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Function for Log {
    fn value(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }

    fn left_domain_border(&self) -> f64 {
        0.0
    }
}
