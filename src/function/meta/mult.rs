use std::sync::Arc;

use crate::function::function::Function;

/// `f(x) * g(x)` over the intersection of both domains.
pub struct Mult {
    lhs: Arc<dyn Function>,
    rhs: Arc<dyn Function>
}

impl Mult {
    pub fn new(lhs: Arc<dyn Function>, rhs: Arc<dyn Function>) -> Mult {
        Mult { lhs, rhs }
    }
}

impl Function for Mult {
    fn value(&self, x: f64) -> f64 {
        self.lhs.value(x) * self.rhs.value(x)
    }

    fn left_domain_border(&self) -> f64 {
        self.lhs.left_domain_border().max(self.rhs.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.lhs.right_domain_border().min(self.rhs.right_domain_border())
    }
}
