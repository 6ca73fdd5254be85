//! Raw big-endian layout:
//!
//! ```text
//! [i32 count][f64 x0][f64 y0][f64 x1][f64 y1]...
//! ```
//!
//! No padding and no framing beyond the count. The structured-record codec
//! reuses the payload routines below unchanged.

use std::io::{
    self,
    Read,
    Write
};

use log::debug;

use crate::codec::codecerror::CodecError;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::point2d::Point2D;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

/// Upper bound on what a decoder reserves up front from an untrusted count.
pub(crate) const MAX_PREALLOCATED_POINTS: usize = 4096;

pub(crate) fn write_payload<W: Write + ?Sized>(points: &[Point2D], out: &mut W) -> Result<(), CodecError> {
    let count = i32::try_from(points.len()).map_err(|_| {
        CodecError::Format(format!("{} points do not fit a 32-bit count", points.len()))
    })?;
    out.write_all(&count.to_be_bytes())?;
    for pt in points {
        out.write_all(&pt.x().to_be_bytes())?;
        out.write_all(&pt.y().to_be_bytes())?;
    }
    Ok(())
}

fn read_f64<R: Read + ?Sized>(input: &mut R) -> io::Result<f64> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf)?;
    Ok(f64::from_be_bytes(buf))
}

fn read_point<R: Read + ?Sized>(input: &mut R) -> io::Result<Point2D> {
    let x = read_f64(input)?;
    let y = read_f64(input)?;
    Ok(Point2D::new(x, y))
}

pub(crate) fn read_payload<R: Read + ?Sized>(input: &mut R) -> Result<Vec<Point2D>, CodecError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf).map_err(|error| match error.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::Format("stream ended before the points count".to_owned()),
        _ => CodecError::Io(error)
    })?;
    let count = i32::from_be_bytes(buf);
    if count < 0 {
        return Err(CodecError::negative_count(count as i64));
    }

    let count = count as usize;
    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));
    for i in 0..count {
        let pt = read_point(input).map_err(|error| match error.kind() {
            io::ErrorKind::UnexpectedEof => CodecError::truncated(i, count),
            _ => CodecError::Io(error)
        })?;
        points.push(pt);
    }
    Ok(points)
}

/// Writes `function` in the raw binary layout and flushes `out`.
pub fn output_tabulated_function<W: Write + ?Sized>(
    function: &dyn TabulatedFunction,
    out: &mut W,
) -> Result<(), CodecError> {
    let points = function.points();
    write_payload(&points, out)?;
    out.flush()?;
    debug!("wrote {} points as binary", points.len());
    Ok(())
}

/// Reads a function written by [`output_tabulated_function`].
pub fn input_tabulated_function<R: Read + ?Sized>(input: &mut R) -> Result<ArrayTabulatedFunction, CodecError> {
    let points = read_payload(input)?;
    debug!("read {} points as binary", points.len());
    Ok(ArrayTabulatedFunction::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_big_endian_without_padding() {
        let f = ArrayTabulatedFunction::new(vec![
            Point2D::new(1.0, 2.0),
            Point2D::new(3.0, 4.0),
        ])
        .unwrap();
        let mut bytes = Vec::new();
        output_tabulated_function(&f, &mut bytes).unwrap();

        assert_eq!(bytes.len(), 4 + 2 * 16);
        assert_eq!(&bytes[..4], &[0, 0, 0, 2]);
        assert_eq!(&bytes[4..12], &1.0f64.to_be_bytes());
        assert_eq!(&bytes[28..36], &4.0f64.to_be_bytes());
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        let bytes = i32::MAX.to_be_bytes();
        let result = read_payload(&mut &bytes[..]);
        assert!(matches!(result, Err(CodecError::Format(_))));
    }
}
