use std::sync::Arc;

use crate::function::function::Function;

/// `scale_y * f(x * scale_x)`.
pub struct Scale {
    function: Arc<dyn Function>,
    scale_x: f64,
    scale_y: f64
}

impl Scale {
    pub fn new(function: Arc<dyn Function>, scale_x: f64, scale_y: f64) -> Scale {
        Scale { function, scale_x, scale_y }
    }

    fn borders(&self) -> (f64, f64) {
        let lhs = self.function.left_domain_border() / self.scale_x;
        let rhs = self.function.right_domain_border() / self.scale_x;
        // 負的縮放會把左右邊界對調
        if self.scale_x < 0.0 { (rhs, lhs) } else { (lhs, rhs) }
    }
}

impl Function for Scale {
    fn value(&self, x: f64) -> f64 {
        self.scale_y * self.function.value(x * self.scale_x)
    }

    fn left_domain_border(&self) -> f64 {
        self.borders().0
    }

    fn right_domain_border(&self) -> f64 {
        self.borders().1
    }
}
