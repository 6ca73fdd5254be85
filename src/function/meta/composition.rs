use std::sync::Arc;

use crate::function::function::Function;

/// `outer(inner(x))`; the domain is the inner function's.
pub struct Composition {
    outer: Arc<dyn Function>,
    inner: Arc<dyn Function>
}

impl Composition {
    pub fn new(outer: Arc<dyn Function>, inner: Arc<dyn Function>) -> Composition {
        Composition { outer, inner }
    }
}

impl Function for Composition {
    fn value(&self, x: f64) -> f64 {
        self.outer.value(self.inner.value(x))
    }

    fn left_domain_border(&self) -> f64 {
        self.inner.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.inner.right_domain_border()
    }
}
