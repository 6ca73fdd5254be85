use std::sync::Arc;

use crate::function::function::Function;

/// `f(x - shift_x) + shift_y`.
pub struct Shift {
    function: Arc<dyn Function>,
    shift_x: f64,
    shift_y: f64
}

impl Shift {
    pub fn new(function: Arc<dyn Function>, shift_x: f64, shift_y: f64) -> Shift {
        Shift { function, shift_x, shift_y }
    }
}

impl Function for Shift {
    fn value(&self, x: f64) -> f64 {
        self.function.value(x - self.shift_x) + self.shift_y
    }

    fn left_domain_border(&self) -> f64 {
        self.function.left_domain_border() + self.shift_x
    }

    fn right_domain_border(&self) -> f64 {
        self.function.right_domain_border() + self.shift_x
    }
}
