//! Framing primitives
//!
//! The only code that reads the raw stream. Everything above works on
//! complete lines and complete payloads.

use std::io::{BufRead, ErrorKind};

use super::wire::{CR, ERROR_MARKER, LF};
use crate::error::{Result, WireError};

/// Read one line terminated by CR LF and return it without the terminator.
///
/// Lines may be arbitrarily long. A stream that ends before the CR, or
/// right after it, is a transport failure; a CR followed by anything but
/// LF is a desync.
pub fn read_until_cr<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    reader.read_until(CR, &mut line)?;

    if line.last() != Some(&CR) {
        return Err(WireError::Transport(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "stream closed before end of line",
        )));
    }
    line.pop();

    let mut lf = [0u8; 1];
    reader.read_exact(&mut lf)?;
    if lf[0] != LF {
        return Err(WireError::desync(format!(
            "expected LF after CR, got 0x{:02x}",
            lf[0]
        )));
    }

    tracing::trace!(len = line.len(), "read line");
    Ok(line)
}

/// Read one line and report whether it is a server error line.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<(Vec<u8>, bool)> {
    let line = read_until_cr(reader)?;
    let is_error = line.first() == Some(&ERROR_MARKER);
    Ok((line, is_error))
}

/// Read exactly `len` payload bytes followed by CR LF.
///
/// The payload is returned untouched; embedded CR or LF bytes are data.
pub fn read_payload<R: BufRead>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;

    let mut terminator = [0u8; 2];
    reader.read_exact(&mut terminator)?;
    if terminator[0] != CR {
        return Err(WireError::desync(format!(
            "payload terminator was 0x{:02x}, expected CR",
            terminator[0]
        )));
    }
    if terminator[1] != LF {
        return Err(WireError::desync(format!(
            "payload terminator was CR 0x{:02x}, expected LF",
            terminator[1]
        )));
    }

    tracing::trace!(len, "read payload");
    Ok(payload)
}
