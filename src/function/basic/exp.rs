use crate::function::function::Function;

#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl Exp {
    pub fn new() -> Exp {
        Exp
    }
}

impl Function for Exp {
    fn value(&self, x: f64) -> f64 {
        x.exp()
    }
}
