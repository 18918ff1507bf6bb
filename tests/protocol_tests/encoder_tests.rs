//! Encoder Tests
//!
//! Tests for request encoding by argument shape.

use wirekv::protocol::{encode_request, write_request, Command, RequestShape, ResponseShape};
use wirekv::WireError;

fn command(code: &'static str, request_shape: RequestShape) -> Command {
    Command::new(code, request_shape, ResponseShape::Status)
}

// =============================================================================
// Wire Format Verification Tests
// =============================================================================

#[test]
fn test_no_arg() {
    let bytes = encode_request(&command("PING", RequestShape::NoArg), &[]).unwrap();
    assert_eq!(&bytes[..], b"PING\r\n");
}

#[test]
fn test_key() {
    let bytes = encode_request(&command("GET", RequestShape::Key), &[b"mykey"]).unwrap();
    assert_eq!(&bytes[..], b"GET mykey\r\n");
}

#[test]
fn test_two_arg_shapes_share_layout() {
    for shape in [RequestShape::KeyKey, RequestShape::KeyNum, RequestShape::KeySpec] {
        let bytes = encode_request(&command("CMD", shape), &[b"a", b"10"]).unwrap();
        assert_eq!(&bytes[..], b"CMD a 10\r\n", "shape {:?}", shape);
    }
}

#[test]
fn test_key_num_num() {
    let bytes =
        encode_request(&command("LRANGE", RequestShape::KeyNumNum), &[b"list", b"0", b"-1"]).unwrap();
    assert_eq!(&bytes[..], b"LRANGE list 0 -1\r\n");
}

#[test]
fn test_key_value() {
    let bytes = encode_request(&command("SET", RequestShape::KeyValue), &[b"k", b"abc"]).unwrap();
    assert_eq!(&bytes[..], b"SET k 3\r\nabc\r\n");
}

#[test]
fn test_key_value_empty_value() {
    let bytes = encode_request(&command("SET", RequestShape::KeyValue), &[b"k", b""]).unwrap();
    assert_eq!(&bytes[..], b"SET k 0\r\n\r\n");
}

#[test]
fn test_key_value_binary_value_untouched() {
    let value: Vec<u8> = vec![0x00, b'\r', b'\n', 0xFF, b' '];
    let bytes =
        encode_request(&command("SET", RequestShape::KeyValue), &[&b"bin"[..], &value[..]]).unwrap();

    let mut expected = b"SET bin 5\r\n".to_vec();
    expected.extend_from_slice(&value);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(&bytes[..], &expected[..]);
}

#[test]
fn test_arguments_not_reformatted() {
    let bytes = encode_request(&command("INCRBY", RequestShape::KeyNum), &[b"n", b"007"]).unwrap();
    assert_eq!(&bytes[..], b"INCRBY n 007\r\n");
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_unimplemented_shapes() {
    for shape in [
        RequestShape::KeyIndexValue,
        RequestShape::KeyKeyValue,
        RequestShape::KeyCountValue,
        RequestShape::MultiKey,
    ] {
        let err = encode_request(&command("X", shape), &[b"a", b"b", b"c"]).unwrap_err();
        assert!(matches!(err, WireError::NotImplemented(_)), "shape {:?}", shape);
        assert!(!shape.is_implemented());
    }
}

#[test]
fn test_missing_argument() {
    let err = encode_request(&command("SET", RequestShape::KeyValue), &[b"k"]).unwrap_err();
    assert!(matches!(err, WireError::Argument(_)));
    assert!(err.to_string().contains("takes 2 argument(s), got 1"));
}

#[test]
fn test_extra_argument() {
    let err = encode_request(&command("PING", RequestShape::NoArg), &[b"x"]).unwrap_err();
    assert!(matches!(err, WireError::Argument(_)));
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_write_request() {
    let mut buffer = Vec::new();
    write_request(&mut buffer, &command("DEL", RequestShape::Key), &[b"gone"]).unwrap();
    write_request(&mut buffer, &command("PING", RequestShape::NoArg), &[]).unwrap();
    assert_eq!(buffer, b"DEL gone\r\nPING\r\n");
}

#[test]
fn test_write_request_failure_writes_nothing() {
    let mut buffer = Vec::new();
    let result = write_request(&mut buffer, &command("MGET", RequestShape::MultiKey), &[b"a"]);
    assert!(result.is_err());
    assert!(buffer.is_empty());
}
