//! Shorthand constructors for the combinators.
//!
//! Every combinator keeps its operands behind `Arc`, so an operand stays alive
//! for as long as any combinator built on it. Operands are only ever read.

use std::sync::Arc;

use crate::function::function::Function;
use crate::function::meta::composition::Composition;
use crate::function::meta::mult::Mult;
use crate::function::meta::power::Power;
use crate::function::meta::scale::Scale;
use crate::function::meta::shift::Shift;
use crate::function::meta::sum::Sum;

pub fn sum(lhs: Arc<dyn Function>, rhs: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Sum::new(lhs, rhs))
}

pub fn mult(lhs: Arc<dyn Function>, rhs: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Mult::new(lhs, rhs))
}

pub fn power(base: Arc<dyn Function>, exponent: f64) -> Arc<dyn Function> {
    Arc::new(Power::new(base, exponent))
}

pub fn composition(outer: Arc<dyn Function>, inner: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Composition::new(outer, inner))
}

pub fn scale(function: Arc<dyn Function>, scale_x: f64, scale_y: f64) -> Arc<dyn Function> {
    Arc::new(Scale::new(function, scale_x, scale_y))
}

pub fn shift(function: Arc<dyn Function>, shift_x: f64, shift_y: f64) -> Arc<dyn Function> {
    Arc::new(Shift::new(function, shift_x, shift_y))
}
