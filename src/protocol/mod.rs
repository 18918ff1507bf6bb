//! Protocol Module
//!
//! Wire codec for the classic line-oriented key-value protocol.
//!
//! ## Request Format
//! ```text
//! ┌────────┬────┬─────┬────┬─────┬──────┐
//! │  CODE  │ SP │ arg │ SP │ ... │ CRLF │
//! └────────┴────┴─────┴────┴─────┴──────┘
//! ```
//! `KeyValue` requests carry the value out of line:
//! `CODE SP key SP <len> CRLF <value> CRLF`.
//!
//! ### Reply Markers
//! - `+` status, `-` error
//! - `:` integer / boolean
//! - `$` bulk size, `*` multi-bulk count
//!
//! ## Usage
//! The caller owns the stream and keeps it half-duplex: write one request,
//! decode exactly one reply, repeat.

mod command;
mod response;
mod framing;
mod codec;
pub mod wire;

pub use command::{Command, RequestShape, ResponseShape};
pub use response::{MultiBulkItems, Response};
pub use framing::{read_line, read_payload, read_until_cr};
pub use codec::{encode_request, decode_response, write_request};
