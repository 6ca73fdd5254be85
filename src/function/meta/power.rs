use std::sync::Arc;

use crate::function::function::Function;

/// `f(x)^exponent` with real exponentiation (`powf` semantics).
pub struct Power {
    base: Arc<dyn Function>,
    exponent: f64
}

impl Power {
    pub fn new(base: Arc<dyn Function>, exponent: f64) -> Power {
        Power { base, exponent }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Function for Power {
    fn value(&self, x: f64) -> f64 {
        self.base.value(x).powf(self.exponent)
    }

    fn left_domain_border(&self) -> f64 {
        self.base.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.base.right_domain_border()
    }
}
