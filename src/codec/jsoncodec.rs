use std::io::{
    self,
    Read,
    Write
};

use crate::codec::codecerror::CodecError;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;

/// Stream failures wrapped by serde_json become [`CodecError::Io`].
fn from_serde_json_error(e: serde_json::Error) -> CodecError {
    if e.is_io() {
        CodecError::Io(io::Error::from(e))
    } else {
        CodecError::Json(e)
    }
}

/// `{"points":[{"x":..,"y":..},...]}`
pub fn to_json_writer<W: Write>(function: &ArrayTabulatedFunction, out: &mut W) -> Result<(), CodecError> {
    serde_json::to_writer(&mut *out, function).map_err(from_serde_json_error)?;
    out.flush()?;
    Ok(())
}

/// Ordering and point-count rules are re-checked while deserializing; a
/// violation surfaces as [`CodecError::Json`].
pub fn from_json_reader<R: Read>(input: R) -> Result<ArrayTabulatedFunction, CodecError> {
    serde_json::from_reader(input).map_err(from_serde_json_error)
}
