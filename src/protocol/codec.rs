//! Protocol codec
//!
//! Request encoding and shape-driven response decoding.
//!
//! ## Request Format
//! ```text
//! CODE[ SP arg]*CRLF                          (inline shapes)
//! CODE SP key SP <len> CRLF <value bytes> CRLF  (KeyValue)
//! ```
//!
//! ## Reply Grammars
//! ```text
//! Status     +OK CRLF            | -ERR msg CRLF
//! Boolean    :0 CRLF / :1 CRLF
//! Number     :<i64> CRLF
//! String     <marker><text> CRLF
//! Bulk       $<n> CRLF <n bytes> CRLF      ($-1 = nil)
//! MultiBulk  *<count> CRLF (Bulk){count}   (*-1 = nil)
//! ```
//!
//! Any reply whose line starts with `-` decodes to an error `Status`,
//! except inside a multi-bulk body, where each item must be a bulk.

use std::io::{BufRead, Write};

use bytes::{BufMut, Bytes, BytesMut};

use super::command::{Command, RequestShape, ResponseShape};
use super::framing::{read_line, read_payload, read_until_cr};
use super::response::{MultiBulkItems, Response};
use super::wire::{
    COUNT_MARKER, CRLF, ERROR_MARKER, FALSE_DIGIT, MAX_BULK_SIZE, SIZE_MARKER, SPACE,
    STATUS_MARKER, TRUE_DIGIT,
};
use crate::error::{Result, WireError};

/// Upper bound on the item vector reserved up front for a multi-bulk reply
const MULTI_BULK_PREALLOC: usize = 1024;

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request for `command` with already formatted arguments.
///
/// Arguments are written as given; nothing is reformatted. Fails without
/// producing any bytes when the shape has no wire layout or the argument
/// count does not match the shape.
pub fn encode_request(command: &Command, args: &[&[u8]]) -> Result<Bytes> {
    let shape = command.request_shape;
    let arity = shape.arity().ok_or_else(|| {
        WireError::NotImplemented(format!(
            "{}: request shape {:?} has no wire encoding",
            command.code, shape
        ))
    })?;

    if args.len() != arity {
        return Err(WireError::Argument(format!(
            "{}: {:?} takes {} argument(s), got {}",
            command.code,
            shape,
            arity,
            args.len()
        )));
    }

    let body_len: usize = args.iter().map(|a| a.len() + 1).sum();
    let mut buf = BytesMut::with_capacity(command.code.len() + body_len + 24);
    buf.put_slice(command.code.as_bytes());

    match shape {
        RequestShape::KeyValue => {
            let (key, value) = (args[0], args[1]);
            buf.put_u8(SPACE);
            buf.put_slice(key);
            buf.put_u8(SPACE);
            buf.put_slice(value.len().to_string().as_bytes());
            buf.put_slice(CRLF);
            buf.put_slice(value);
        }
        _ => {
            for arg in args {
                buf.put_u8(SPACE);
                buf.put_slice(arg);
            }
        }
    }

    buf.put_slice(CRLF);
    Ok(buf.freeze())
}

/// Encode and write a request, flushing the writer
pub fn write_request<W: Write>(writer: &mut W, command: &Command, args: &[&[u8]]) -> Result<()> {
    let bytes = encode_request(command, args)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Read exactly one reply to `command` from `reader`.
///
/// Server errors come back as `Ok(Response::Status { is_error: true, .. })`.
/// `Err` means the stream failed or lost alignment and must be abandoned.
pub fn decode_response<R: BufRead>(reader: &mut R, command: &Command) -> Result<Response> {
    match command.response_shape {
        ResponseShape::Status => read_status(reader),
        ResponseShape::Boolean => read_boolean(reader),
        ResponseShape::Number => read_number(reader),
        ResponseShape::String => read_string(reader),
        ResponseShape::Bulk => read_bulk(reader),
        ResponseShape::MultiBulk => read_multi_bulk(reader),
        ResponseShape::Virtual => Err(WireError::NotImplemented(format!(
            "{}: virtual responses are not decodable",
            command.code
        ))),
    }
}

/// Build an error status from a line that starts with the error marker
fn error_status(line: &[u8]) -> Response {
    Response::error(line_text(&line[1..]))
}

fn line_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn read_status<R: BufRead>(reader: &mut R) -> Result<Response> {
    let (line, is_error) = read_line(reader)?;
    let text = match line.first() {
        Some(&STATUS_MARKER) | Some(&ERROR_MARKER) => &line[1..],
        _ => &line[..],
    };
    Ok(Response::status(line_text(text), is_error))
}

fn read_boolean<R: BufRead>(reader: &mut R) -> Result<Response> {
    let (line, is_error) = read_line(reader)?;
    if is_error {
        return Ok(error_status(&line));
    }

    match line.get(1) {
        Some(&TRUE_DIGIT) => Ok(Response::boolean(true)),
        Some(&FALSE_DIGIT) => Ok(Response::boolean(false)),
        _ => Err(WireError::desync(format!(
            "expected boolean digit in {:?}",
            String::from_utf8_lossy(&line)
        ))),
    }
}

fn read_number<R: BufRead>(reader: &mut R) -> Result<Response> {
    let (line, is_error) = read_line(reader)?;
    if is_error {
        return Ok(error_status(&line));
    }

    let digits = line
        .get(1..)
        .ok_or_else(|| WireError::desync("expected int64 representation, got empty line"))?;
    Ok(Response::number(parse_i64(digits)?))
}

fn read_string<R: BufRead>(reader: &mut R) -> Result<Response> {
    let (line, is_error) = read_line(reader)?;
    if is_error {
        return Ok(error_status(&line));
    }

    let text = line
        .get(1..)
        .ok_or_else(|| WireError::desync("expected marker before string value, got empty line"))?;
    Ok(Response::string(line_text(text)))
}

fn read_bulk<R: BufRead>(reader: &mut R) -> Result<Response> {
    let header = read_until_cr(reader)?;
    match header.first() {
        Some(&ERROR_MARKER) => return Ok(error_status(&header)),
        Some(&SIZE_MARKER) => {}
        _ => return Err(unexpected_marker("SIZE", &header)),
    }

    let data = read_sized_item(reader, &header)?;
    Ok(Response::bulk(data))
}

fn read_multi_bulk<R: BufRead>(reader: &mut R) -> Result<Response> {
    let header = read_until_cr(reader)?;
    match header.first() {
        Some(&ERROR_MARKER) => return Ok(error_status(&header)),
        Some(&COUNT_MARKER) => {}
        _ => return Err(unexpected_marker("COUNT", &header)),
    }

    let count = parse_i64(&header[1..])?;
    tracing::trace!(count, "multi-bulk header");
    if count < 0 {
        return Ok(Response::multi_bulk(None));
    }

    let count = usize::try_from(count)
        .map_err(|_| WireError::desync(format!("multi-bulk count {} out of range", count)))?;
    let mut items: MultiBulkItems = Vec::with_capacity(count.min(MULTI_BULK_PREALLOC));
    for _ in 0..count {
        // Items must be bulks; an error marker here is not tolerated.
        let item_header = read_until_cr(reader)?;
        if item_header.first() != Some(&SIZE_MARKER) {
            return Err(unexpected_marker("SIZE (multi-bulk item)", &item_header));
        }
        items.push(read_sized_item(reader, &item_header)?);
    }

    Ok(Response::multi_bulk(Some(items)))
}

/// Parse the length from a `$<n>` header and read the payload it announces
fn read_sized_item<R: BufRead>(reader: &mut R, header: &[u8]) -> Result<Option<Vec<u8>>> {
    let size = parse_i64(&header[1..])?;
    tracing::trace!(size, "bulk header");
    if size < 0 {
        return Ok(None);
    }
    if size > MAX_BULK_SIZE {
        return Err(WireError::desync(format!(
            "bulk size {} exceeds limit of {} bytes",
            size, MAX_BULK_SIZE
        )));
    }

    // Bounded by MAX_BULK_SIZE above.
    let payload = read_payload(reader, size as usize)?;
    Ok(Some(payload))
}

fn parse_i64(digits: &[u8]) -> Result<i64> {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            WireError::desync(format!(
                "expected int64 representation, got {:?}",
                String::from_utf8_lossy(digits)
            ))
        })
}

fn unexpected_marker(expected: &str, line: &[u8]) -> WireError {
    WireError::desync(format!(
        "expected {} marker, got {:?}",
        expected,
        String::from_utf8_lossy(line)
    ))
}
