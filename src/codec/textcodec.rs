//! Whitespace-separated text layout:
//!
//! ```text
//! <count> <x0> <y0> <x1> <y1> ...
//! ```
//!
//! Numbers are written with the shortest representation that parses back to
//! the same bits, so text round-trips are exact. Tokens after the declared
//! points are ignored.

use std::io::{
    Read,
    Write
};
use std::str::{
    FromStr,
    SplitWhitespace
};

use log::debug;

use crate::codec::binarycodec::MAX_PREALLOCATED_POINTS;
use crate::codec::codecerror::CodecError;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::point2d::Point2D;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

/// Writes `function` as text, every token followed by a single space, and
/// flushes `out`.
pub fn write_tabulated_function<W: Write + ?Sized>(
    function: &dyn TabulatedFunction,
    out: &mut W,
) -> Result<(), CodecError> {
    let points = function.points();
    write!(out, "{} ", points.len())?;
    for pt in &points {
        write!(out, "{} {} ", pt.x(), pt.y())?;
    }
    out.flush()?;
    debug!("wrote {} points as text", points.len());
    Ok(())
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>
}

impl<'a> Tokens<'a> {
    fn next<T: FromStr>(&mut self, expected: &'static str, on_missing: impl FnOnce() -> CodecError) -> Result<T, CodecError> {
        let token = self.inner.next().ok_or_else(on_missing)?;
        token.parse::<T>().map_err(|_| CodecError::Parse {
            token: token.to_owned(),
            expected
        })
    }
}

/// Reads a function written by [`write_tabulated_function`].
pub fn read_tabulated_function<R: Read + ?Sized>(input: &mut R) -> Result<ArrayTabulatedFunction, CodecError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        let start = e.utf8_error().valid_up_to();
        let end = start + e.utf8_error().error_len().unwrap_or(e.as_bytes().len() - start);
        CodecError::Parse {
            token: e.as_bytes()[start..end].escape_ascii().to_string(),
            expected: "UTF-8 text"
        }
    })?;
    let mut tokens = Tokens { inner: text.split_whitespace() };

    let count: i32 = tokens.next("a 32-bit points count", || {
        CodecError::Format("no points count found".to_owned())
    })?;
    if count < 0 {
        return Err(CodecError::negative_count(count as i64));
    }

    let count = count as usize;
    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));
    for i in 0..count {
        let x: f64 = tokens.next("a number", || CodecError::truncated(i, count))?;
        let y: f64 = tokens.next("a number", || CodecError::truncated(i, count))?;
        points.push(Point2D::new(x, y));
    }
    debug!("read {} points as text", points.len());
    Ok(ArrayTabulatedFunction::new(points)?)
}
