//! Wire constants
//!
//! The single-byte markers and the two-byte terminator that delimit every
//! line and every fixed-length payload.

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const SPACE: u8 = b' ';

/// Leads a server-reported error line: `-ERR ...`
pub const ERROR_MARKER: u8 = b'-';

/// Leads a success status line: `+OK`
pub const STATUS_MARKER: u8 = b'+';

/// Leads a multi-bulk header: `*<count>`
pub const COUNT_MARKER: u8 = b'*';

/// Leads a bulk header: `$<size>`
pub const SIZE_MARKER: u8 = b'$';

/// Leads an integer or boolean line: `:<n>`
pub const NUMBER_MARKER: u8 = b':';

pub const FALSE_DIGIT: u8 = b'0';
pub const TRUE_DIGIT: u8 = b'1';

/// Line and payload terminator
pub const CRLF: &[u8; 2] = b"\r\n";

/// Largest bulk payload accepted before the length is treated as garbage (512 MiB)
pub const MAX_BULK_SIZE: i64 = 512 * 1024 * 1024;
