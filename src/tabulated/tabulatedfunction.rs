use crate::function::function::Function;
use crate::tabulated::point2d::Point2D;
use crate::tabulated::tabulatederror::TabulatedFunctionError;

/// Tolerance for boundary hits during evaluation and for X ordering.
pub const EPSILON: f64 = 1e-10;

/// The single ordering rule shared by construction and every mutation:
/// neighbouring X values must be more than [`EPSILON`] apart.
pub fn is_strictly_ordered(lhs_x: f64, rhs_x: f64) -> bool {
    rhs_x - lhs_x > EPSILON
}

/// A function defined by an ordered set of points and evaluated by
/// piecewise-linear interpolation between them.
///
/// Points are addressed by index `0..points_count()`. Accessors hand out
/// copies; the stored points only change through the mutators below, which
/// all preserve the ordering rule of [`is_strictly_ordered`] and keep at least
/// two points.
pub trait TabulatedFunction: Function {
    fn points_count(&self) -> usize;

    fn point(&self, index: usize) -> Result<Point2D, TabulatedFunctionError>;

    fn point_x(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index).map(|pt| pt.x())
    }

    fn point_y(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index).map(|pt| pt.y())
    }

    fn points(&self) -> Vec<Point2D>;

    fn set_point(&mut self, index: usize, point: Point2D) -> Result<(), TabulatedFunctionError>;

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedFunctionError>;

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError>;

    fn insert_point(&mut self, point: Point2D) -> Result<(), TabulatedFunctionError>;

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError>;
}
