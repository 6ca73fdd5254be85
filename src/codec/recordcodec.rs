//! Self-describing record: a small envelope in front of the binary payload.
//!
//! ```text
//! "TABF" | u16 version | u8 tag length | tag bytes | binary payload
//! ```
//!
//! The envelope tells a decoder what it is looking at; the payload is
//! byte-for-byte what the binary codec writes.

use std::io::{
    self,
    Read,
    Write
};

use log::debug;

use crate::codec::binarycodec::{
    read_payload,
    write_payload
};
use crate::codec::codecerror::CodecError;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

pub const RECORD_MAGIC: &[u8; 4] = b"TABF";
pub const RECORD_VERSION: u16 = 1;
pub const ARRAY_TABULATED_FUNCTION_TAG: &str = "ArrayTabulatedFunction";

fn read_envelope_bytes<R: Read + ?Sized>(input: &mut R, buf: &mut [u8]) -> Result<(), CodecError> {
    input.read_exact(buf).map_err(|error| match error.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::Format("stream ended inside the record envelope".to_owned()),
        _ => CodecError::Io(error)
    })
}

/// Writes `function` wrapped in the record envelope and flushes `out`.
pub fn write_record<W: Write + ?Sized>(
    function: &dyn TabulatedFunction,
    out: &mut W,
) -> Result<(), CodecError> {
    let tag = ARRAY_TABULATED_FUNCTION_TAG.as_bytes();
    out.write_all(RECORD_MAGIC)?;
    out.write_all(&RECORD_VERSION.to_be_bytes())?;
    out.write_all(&[tag.len() as u8])?;
    out.write_all(tag)?;

    let points = function.points();
    write_payload(&points, out)?;
    out.flush()?;
    debug!("wrote {} points as record", points.len());
    Ok(())
}

/// Reads a record written by [`write_record`], checking the envelope before
/// the payload.
pub fn read_record<R: Read + ?Sized>(input: &mut R) -> Result<ArrayTabulatedFunction, CodecError> {
    let mut magic = [0u8; 4];
    read_envelope_bytes(input, &mut magic)?;
    if &magic != RECORD_MAGIC {
        return Err(CodecError::Format(format!("unexpected record magic {:?}", magic)));
    }

    let mut version = [0u8; 2];
    read_envelope_bytes(input, &mut version)?;
    let version = u16::from_be_bytes(version);
    if version != RECORD_VERSION {
        return Err(CodecError::Format(format!("unsupported record version {}", version)));
    }

    let mut tag_len = [0u8; 1];
    read_envelope_bytes(input, &mut tag_len)?;
    let mut tag = vec![0u8; tag_len[0] as usize];
    read_envelope_bytes(input, &mut tag)?;
    if tag != ARRAY_TABULATED_FUNCTION_TAG.as_bytes() {
        return Err(CodecError::Format(format!(
            "unknown record type '{}'",
            String::from_utf8_lossy(&tag)
        )));
    }

    let points = read_payload(input)?;
    debug!("read {} points as record", points.len());
    Ok(ArrayTabulatedFunction::new(points)?)
}
