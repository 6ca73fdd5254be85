use std::fmt;

use log::{
    debug,
    trace
};
use serde::{
    Deserialize,
    Serialize
};

use crate::function::function::Function;
use crate::tabulated::point2d::Point2D;
use crate::tabulated::tabulatederror::TabulatedFunctionError;
use crate::tabulated::tabulatedfunction::{
    is_strictly_ordered,
    TabulatedFunction,
    EPSILON
};

// ─────────────────────────────────────────────
// 共用輔助函數
// ─────────────────────────────────────────────

/// `count` evenly spaced values over `[left_x, right_x]`, the last one placed
/// exactly at `right_x`.
pub(crate) fn evenly_spaced(left_x: f64, right_x: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = (right_x - left_x) / (count - 1) as f64;
    (0..count).map(move |i| {
        if i + 1 == count {
            right_x
        } else {
            left_x + step * i as f64
        }
    })
}

fn check_borders(left_x: f64, right_x: f64, count: usize) -> Result<(), TabulatedFunctionError> {
    if !(left_x < right_x) {
        return Err(TabulatedFunctionError::InvalidArgument(format!(
            "left border {} must be less than right border {}",
            left_x, right_x
        )));
    }
    if count < 2 {
        return Err(TabulatedFunctionError::InvalidArgument(format!(
            "at least 2 points required, got {}",
            count
        )));
    }
    Ok(())
}

// ─────────────────────────────────────────────
// ArrayTabulatedFunction
// ─────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct TabulatedFunctionJsonProp {
    points: Vec<Point2D>
}

/// Tabulated function backed by a contiguous, index-addressed buffer.
///
/// Capacity doubles when an insertion finds the buffer full and is never
/// given back on deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TabulatedFunctionJsonProp", into = "TabulatedFunctionJsonProp")]
pub struct ArrayTabulatedFunction {
    points: Vec<Point2D>
}

impl ArrayTabulatedFunction {
    /// Takes ownership of `points`, which must hold at least two points with
    /// strictly increasing X.
    pub fn new(points: Vec<Point2D>) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        if points.len() < 2 {
            return Err(TabulatedFunctionError::InvalidArgument(format!(
                "at least 2 points required, got {}",
                points.len()
            )));
        }
        if let Some(i) = points
            .windows(2)
            .position(|pair| !is_strictly_ordered(pair[0].x(), pair[1].x()))
        {
            return Err(TabulatedFunctionError::InvalidArgument(format!(
                "points must be ordered by x: {} is followed by {}",
                points[i],
                points[i + 1]
            )));
        }
        debug!("tabulated function over [{}, {}] with {} points",
               points[0].x(), points[points.len() - 1].x(), points.len());
        Ok(ArrayTabulatedFunction { points })
    }

    /// `points_count` evenly spaced points over `[left_x, right_x]`, all with
    /// `y = 0`.
    pub fn with_count(
        left_x: f64,
        right_x: f64,
        points_count: usize,
    ) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        check_borders(left_x, right_x, points_count)?;
        let points = evenly_spaced(left_x, right_x, points_count)
            .map(|x| Point2D::new(x, 0.0))
            .collect();
        ArrayTabulatedFunction::new(points)
    }

    /// Evenly spaced X over `[left_x, right_x]` paired with `values` in order.
    pub fn with_values(
        left_x: f64,
        right_x: f64,
        values: &[f64],
    ) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        check_borders(left_x, right_x, values.len())?;
        let points = evenly_spaced(left_x, right_x, values.len())
            .zip(values.iter())
            .map(|(x, &y)| Point2D::new(x, y))
            .collect();
        ArrayTabulatedFunction::new(points)
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    fn check_index(&self, index: usize) -> Result<(), TabulatedFunctionError> {
        if index >= self.points.len() {
            Err(TabulatedFunctionError::IndexOutOfRange {
                index,
                count: self.points.len(),
            })
        } else {
            Ok(())
        }
    }

    fn check_order_at(&self, index: usize, x: f64) -> Result<(), TabulatedFunctionError> {
        if index > 0 {
            let lhs_x = self.points[index - 1].x();
            if !is_strictly_ordered(lhs_x, x) {
                return Err(TabulatedFunctionError::InvalidPointOrder(format!(
                    "x = {} must be greater than previous x = {}",
                    x, lhs_x
                )));
            }
        }
        if index + 1 < self.points.len() {
            let rhs_x = self.points[index + 1].x();
            if !is_strictly_ordered(x, rhs_x) {
                return Err(TabulatedFunctionError::InvalidPointOrder(format!(
                    "x = {} must be less than next x = {}",
                    x, rhs_x
                )));
            }
        }
        Ok(())
    }

    /// Index of the segment `[x_i, x_{i+1}]` holding `x`; `x` must already be
    /// inside the domain.
    fn find_segment(&self, x: f64) -> usize {
        let n = self.points.partition_point(|pt| pt.x() <= x);
        n.saturating_sub(1).min(self.points.len() - 2)
    }

    fn grow_if_full(&mut self) {
        let capacity = self.points.capacity();
        if self.points.len() == capacity {
            self.points.reserve_exact(capacity.max(1));
            trace!("point buffer grown from {} to {}", capacity, self.points.capacity());
        }
    }
}

impl TryFrom<TabulatedFunctionJsonProp> for ArrayTabulatedFunction {
    type Error = TabulatedFunctionError;

    fn try_from(prop: TabulatedFunctionJsonProp) -> Result<Self, Self::Error> {
        ArrayTabulatedFunction::new(prop.points)
    }
}

impl From<ArrayTabulatedFunction> for TabulatedFunctionJsonProp {
    fn from(function: ArrayTabulatedFunction) -> Self {
        TabulatedFunctionJsonProp { points: function.points }
    }
}

// ─────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────

impl Function for ArrayTabulatedFunction {
    /// Piecewise-linear value, or `NaN` outside the domain.
    fn value(&self, x: f64) -> f64 {
        if !(x >= self.left_domain_border() && x <= self.right_domain_border()) {
            return f64::NAN;
        }

        let i = self.find_segment(x);
        let lhs_pt = &self.points[i];
        let rhs_pt = &self.points[i + 1];

        if (x - lhs_pt.x()).abs() < EPSILON {
            return lhs_pt.y();
        }
        if (x - rhs_pt.x()).abs() < EPSILON {
            return rhs_pt.y();
        }
        lhs_pt.y() + Point2D::slope(lhs_pt, rhs_pt) * (x - lhs_pt.x())
    }

    fn left_domain_border(&self) -> f64 {
        self.points[0].x()
    }

    fn right_domain_border(&self) -> f64 {
        self.points[self.points.len() - 1].x()
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<Point2D, TabulatedFunctionError> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    fn points(&self) -> Vec<Point2D> {
        self.points.clone()
    }

    fn set_point(&mut self, index: usize, point: Point2D) -> Result<(), TabulatedFunctionError> {
        self.check_index(index)?;
        self.check_order_at(index, point.x())?;
        self.points[index] = point;
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedFunctionError> {
        self.check_index(index)?;
        self.check_order_at(index, x)?;
        self.points[index] = self.points[index].with_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        self.check_index(index)?;
        self.points[index] = self.points[index].with_y(y);
        Ok(())
    }

    fn insert_point(&mut self, point: Point2D) -> Result<(), TabulatedFunctionError> {
        if point.x().is_nan() {
            return Err(TabulatedFunctionError::InvalidPointOrder(
                "x must not be NaN".to_owned(),
            ));
        }

        let count = self.points.len();
        let index = self
            .points
            .iter()
            .position(|pt| pt.x() >= point.x() - EPSILON)
            .unwrap_or(count);
        if index < count && !is_strictly_ordered(point.x(), self.points[index].x()) {
            return Err(TabulatedFunctionError::DuplicateX(point.x()));
        }

        self.grow_if_full();
        self.points.insert(index, point);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        let count = self.points.len();
        if count < 3 {
            return Err(TabulatedFunctionError::MinimumPointsViolation { count });
        }
        self.check_index(index)?;
        self.points.remove(index);
        Ok(())
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pt) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pt)?;
        }
        write!(f, "}}")
    }
}
