//! Encoding and decoding through every codec, including malformed input and
//! failing streams.

use std::io::{
    self,
    Cursor,
    Read,
    Write
};

use approx::assert_abs_diff_eq;

use tabfunc::codec::binarycodec::{
    input_tabulated_function,
    output_tabulated_function
};
use tabfunc::codec::codecerror::CodecError;
use tabfunc::codec::jsoncodec::{
    from_json_reader,
    to_json_writer
};
use tabfunc::codec::recordcodec::{
    read_record,
    write_record,
    ARRAY_TABULATED_FUNCTION_TAG,
    RECORD_MAGIC,
    RECORD_VERSION
};
use tabfunc::codec::textcodec::{
    read_tabulated_function,
    write_tabulated_function
};
use tabfunc::function::basic::exp::Exp;
use tabfunc::function::basic::log::Log;
use tabfunc::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfunc::tabulated::point2d::Point2D;
use tabfunc::tabulated::tabulatederror::TabulatedFunctionError;
use tabfunc::tabulated::tabulatedfunction::TabulatedFunction;
use tabfunc::tabulated::tabulator::tabulate;

struct FailingStream;

impl Read for FailingStream {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "read refused"))
    }
}

impl Write for FailingStream {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "write refused"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn samples() -> Vec<ArrayTabulatedFunction> {
    vec![
        tabulate(&Exp::new(), 0.0, 10.0, 11).unwrap(),
        tabulate(&Log::natural(), 0.1, 10.0, 37).unwrap(),
        ArrayTabulatedFunction::new(vec![
            Point2D::new(-1e300, 1e-300),
            Point2D::new(0.1, -0.0),
            Point2D::new(1.0 / 3.0, f64::MAX),
        ])
        .unwrap(),
    ]
}

fn assert_same_points(original: &dyn TabulatedFunction, restored: &dyn TabulatedFunction) {
    assert_eq!(original.points_count(), restored.points_count());
    for i in 0..original.points_count() {
        let (lhs, rhs) = (original.point(i).unwrap(), restored.point(i).unwrap());
        assert_abs_diff_eq!(lhs.x(), rhs.x(), epsilon = 1e-10);
        assert_abs_diff_eq!(lhs.y(), rhs.y(), epsilon = 1e-10);
    }
}

fn binary_bytes(count: i32, values: &[f64]) -> Vec<u8> {
    let mut bytes = count.to_be_bytes().to_vec();
    for v in values {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    bytes
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_binary_round_trip() {
    for f in samples() {
        let mut bytes = Vec::new();
        output_tabulated_function(&f, &mut bytes).unwrap();
        let restored = input_tabulated_function(&mut Cursor::new(bytes)).unwrap();
        assert_same_points(&f, &restored);
        assert_eq!(f, restored);
    }
}

#[test]
fn test_text_round_trip_is_exact() {
    for f in samples() {
        let mut text = Vec::new();
        write_tabulated_function(&f, &mut text).unwrap();
        let restored = read_tabulated_function(&mut text.as_slice()).unwrap();
        assert_same_points(&f, &restored);
        assert_eq!(f, restored);
    }
}

#[test]
fn test_record_round_trip() {
    for f in samples() {
        let mut bytes = Vec::new();
        write_record(&f, &mut bytes).unwrap();
        let restored = read_record(&mut bytes.as_slice()).unwrap();
        assert_same_points(&f, &restored);
    }
}

#[test]
fn test_json_round_trip() {
    for f in samples() {
        let mut bytes = Vec::new();
        to_json_writer(&f, &mut bytes).unwrap();
        let restored = from_json_reader(bytes.as_slice()).unwrap();
        assert_same_points(&f, &restored);
    }
}

#[test]
fn test_encoding_is_idempotent() {
    let f = tabulate(&Exp::new(), -2.0, 2.0, 9).unwrap();

    let (mut first, mut second) = (Vec::new(), Vec::new());
    output_tabulated_function(&f, &mut first).unwrap();
    output_tabulated_function(&f, &mut second).unwrap();
    assert_eq!(first, second);

    let (mut first, mut second) = (Vec::new(), Vec::new());
    write_tabulated_function(&f, &mut first).unwrap();
    write_tabulated_function(&f, &mut second).unwrap();
    assert_eq!(first, second);

    let (mut first, mut second) = (Vec::new(), Vec::new());
    write_record(&f, &mut first).unwrap();
    write_record(&f, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_consecutive_binary_functions_share_a_stream() {
    let (f, g) = (samples().remove(0), samples().remove(1));
    let mut bytes = Vec::new();
    output_tabulated_function(&f, &mut bytes).unwrap();
    output_tabulated_function(&g, &mut bytes).unwrap();

    let mut cursor = Cursor::new(bytes);
    assert_eq!(input_tabulated_function(&mut cursor).unwrap(), f);
    assert_eq!(input_tabulated_function(&mut cursor).unwrap(), g);
}

// ============================================================================
// Malformed Input
// ============================================================================

#[test]
fn test_binary_negative_count() {
    let bytes = binary_bytes(-1, &[]);
    let result = input_tabulated_function(&mut bytes.as_slice());
    assert!(matches!(result, Err(CodecError::Format(_))));
}

#[test]
fn test_binary_truncated() {
    let bytes = binary_bytes(3, &[0.0, 1.0, 1.0, 2.0, 2.0]);
    let result = input_tabulated_function(&mut bytes.as_slice());
    assert!(matches!(result, Err(CodecError::Format(_))));

    let result = input_tabulated_function(&mut [0u8, 0].as_slice());
    assert!(matches!(result, Err(CodecError::Format(_))));
}

#[test]
fn test_binary_rejects_invalid_points() {
    let single = binary_bytes(1, &[0.0, 1.0]);
    assert!(matches!(
        input_tabulated_function(&mut single.as_slice()),
        Err(CodecError::Function(TabulatedFunctionError::InvalidArgument(_)))
    ));

    let unordered = binary_bytes(2, &[1.0, 0.0, 0.0, 0.0]);
    assert!(matches!(
        input_tabulated_function(&mut unordered.as_slice()),
        Err(CodecError::Function(TabulatedFunctionError::InvalidArgument(_)))
    ));
}

#[test]
fn test_text_malformed() {
    let cases = [
        ("", "format"),
        ("   \n", "format"),
        ("-2 0 0", "format"),
        ("3 0 0 1 1 2", "format"),
        ("two 0 0 1 1", "parse"),
        ("2 0 0 x 1", "parse"),
        ("2.5 0 0 1 1", "parse"),
    ];
    for (text, kind) in cases {
        let result = read_tabulated_function(&mut text.as_bytes());
        match (kind, result) {
            ("format", Err(CodecError::Format(_))) => {}
            ("parse", Err(CodecError::Parse { .. })) => {}
            (_, other) => panic!("{:?}: expected {} error, got {:?}", text, kind, other)
        }
    }

    let not_utf8: &[u8] = b"2 0 0 \xff 1 1";
    assert!(matches!(
        read_tabulated_function(&mut &not_utf8[..]),
        Err(CodecError::Parse { .. })
    ));
}

#[test]
fn test_text_ignores_trailing_tokens() {
    let f = read_tabulated_function(&mut "2 0 0 1 1 leftover".as_bytes()).unwrap();
    assert_eq!(f.points_count(), 2);
}

#[test]
fn test_record_envelope_checked() {
    let f = samples().remove(0);
    let mut good = Vec::new();
    write_record(&f, &mut good).unwrap();

    let mut bad_magic = good.clone();
    bad_magic[0] = b'X';
    assert!(matches!(read_record(&mut bad_magic.as_slice()), Err(CodecError::Format(_))));

    let mut bad_version = good.clone();
    bad_version[4..6].copy_from_slice(&(RECORD_VERSION + 1).to_be_bytes());
    assert!(matches!(read_record(&mut bad_version.as_slice()), Err(CodecError::Format(_))));

    let mut bad_tag = good.clone();
    bad_tag[7] = b'L';
    assert!(matches!(read_record(&mut bad_tag.as_slice()), Err(CodecError::Format(_))));

    let envelope_len = RECORD_MAGIC.len() + 2 + 1 + ARRAY_TABULATED_FUNCTION_TAG.len();
    let truncated = &good[..envelope_len + 10];
    assert!(matches!(read_record(&mut &truncated[..]), Err(CodecError::Format(_))));

    assert!(matches!(read_record(&mut &good[..3]), Err(CodecError::Format(_))));
}

#[test]
fn test_binary_payload_is_not_a_record() {
    let f = samples().remove(0);
    let mut bytes = Vec::new();
    output_tabulated_function(&f, &mut bytes).unwrap();
    assert!(matches!(read_record(&mut bytes.as_slice()), Err(CodecError::Format(_))));
}

#[test]
fn test_json_rejects_invalid_points() {
    let json = r#"{"points":[{"x":1.0,"y":0.0},{"x":0.0,"y":0.0}]}"#;
    assert!(matches!(from_json_reader(json.as_bytes()), Err(CodecError::Json(_))));
}

// ============================================================================
// Stream Failures
// ============================================================================

#[test]
fn test_stream_failures_are_io_errors() {
    let f = samples().remove(0);

    assert!(matches!(output_tabulated_function(&f, &mut FailingStream), Err(CodecError::Io(_))));
    assert!(matches!(write_tabulated_function(&f, &mut FailingStream), Err(CodecError::Io(_))));
    assert!(matches!(write_record(&f, &mut FailingStream), Err(CodecError::Io(_))));
    assert!(matches!(to_json_writer(&f, &mut FailingStream), Err(CodecError::Io(_))));

    assert!(matches!(input_tabulated_function(&mut FailingStream), Err(CodecError::Io(_))));
    assert!(matches!(read_tabulated_function(&mut FailingStream), Err(CodecError::Io(_))));
    assert!(matches!(read_record(&mut FailingStream), Err(CodecError::Io(_))));
    assert!(matches!(from_json_reader(FailingStream), Err(CodecError::Io(_))));
}

#[test]
fn test_json_stream_failure_keeps_error_kind() {
    match from_json_reader(FailingStream) {
        Err(CodecError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected I/O error, got {:?}", other)
    }
}
