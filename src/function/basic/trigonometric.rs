use crate::function::function::Function;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrigonometricKind {
    Sin,
    Cos,
    Tan
}

/// sin / cos / tan over the whole real line.
#[derive(Debug, Clone, Copy)]
pub struct Trigonometric {
    kind: TrigonometricKind
}

impl Trigonometric {
    pub fn new(kind: TrigonometricKind) -> Trigonometric {
        Trigonometric { kind }
    }

    pub fn sin() -> Trigonometric {
        Trigonometric::new(TrigonometricKind::Sin)
    }

    pub fn cos() -> Trigonometric {
        Trigonometric::new(TrigonometricKind::Cos)
    }

    pub fn tan() -> Trigonometric {
        Trigonometric::new(TrigonometricKind::Tan)
    }

    pub fn kind(&self) -> TrigonometricKind {
        self.kind
    }
}

impl Function for Trigonometric {
    fn value(&self, x: f64) -> f64 {
        match self.kind {
            TrigonometricKind::Sin => x.sin(),
            TrigonometricKind::Cos => x.cos(),
            TrigonometricKind::Tan => x.tan()
        }
    }
}
