use log::debug;

use crate::function::function::Function;
use crate::tabulated::arraytabulatedfunction::{
    evenly_spaced,
    ArrayTabulatedFunction
};
use crate::tabulated::point2d::Point2D;
use crate::tabulated::tabulatederror::TabulatedFunctionError;

/// Samples `function` at `points_count` evenly spaced X over
/// `[left_x, right_x]` and stores the samples.
///
/// Sampling is assumed pure; whatever `function` returns (including `NaN`)
/// is stored as is. Equal borders pass this check but are rejected by the
/// constructor, since every sample would share one X.
pub fn tabulate(
    function: &dyn Function,
    left_x: f64,
    right_x: f64,
    points_count: usize,
) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
    if left_x > right_x || left_x.is_nan() || right_x.is_nan() {
        return Err(TabulatedFunctionError::InvalidArgument(format!(
            "left border {} must not exceed right border {}",
            left_x, right_x
        )));
    }
    if points_count < 2 {
        return Err(TabulatedFunctionError::InvalidArgument(format!(
            "at least 2 points required, got {}",
            points_count
        )));
    }

    debug!("tabulating over [{}, {}] with {} points", left_x, right_x, points_count);
    let points = evenly_spaced(left_x, right_x, points_count)
        .map(|x| Point2D::new(x, function.value(x)))
        .collect();
    ArrayTabulatedFunction::new(points)
}

/// `from`, `from + step`, ... up to `to`; empty unless `step > 0` and
/// `from <= to`.
pub fn stepped(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && from <= to {
        ((to - from) / step).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| from + step * i as f64)
}

/// Largest `|target - function(x)|` over `xs`, ignoring `NaN` values.
pub fn max_deviation(function: &dyn Function, target: f64, xs: impl Iterator<Item = f64>) -> f64 {
    xs.map(|x| function.value(x))
        .filter(|y| !y.is_nan())
        .map(|y| (target - y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::function::FnFunction;

    #[test]
    fn stepped_includes_reachable_end() {
        let xs: Vec<f64> = stepped(0.0, 1.0, 0.25).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(stepped(0.0, 1.0, 0.0).count(), 0);
        assert_eq!(stepped(1.0, 0.0, 0.5).count(), 0);
    }

    #[test]
    fn max_deviation_skips_nan() {
        let f = FnFunction::new(|x| if x < 0.0 { f64::NAN } else { x });
        assert_eq!(max_deviation(&f, 0.5, stepped(-1.0, 1.0, 0.5)), 0.5);
    }
}
