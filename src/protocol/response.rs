//! Response definitions
//!
//! The result of one command. A server-reported error is still a response:
//! it is always a `Status` with `is_error` set, whatever shape was asked for.

use std::fmt;

use super::command::ResponseShape;

/// Items of a multi-bulk reply; `None` is a nil item
pub type MultiBulkItems = Vec<Option<Vec<u8>>>;

/// A decoded reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Status line with its leading `+`/`-` marker removed
    Status { text: String, is_error: bool },

    Boolean { value: bool, is_error: bool },

    Number { value: i64, is_error: bool },

    StringValue { text: String, is_error: bool },

    /// `None` is a nil bulk reply, distinct from an empty payload
    Bulk { data: Option<Vec<u8>>, is_error: bool },

    /// `None` is a nil array; items may be nil independently
    MultiBulk { items: Option<MultiBulkItems>, is_error: bool },
}

impl Response {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn status(text: impl Into<String>, is_error: bool) -> Self {
        Response::Status {
            text: text.into(),
            is_error,
        }
    }

    /// Server-reported application error
    pub fn error(text: impl Into<String>) -> Self {
        Self::status(text, true)
    }

    pub fn boolean(value: bool) -> Self {
        Response::Boolean {
            value,
            is_error: false,
        }
    }

    pub fn number(value: i64) -> Self {
        Response::Number {
            value,
            is_error: false,
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Response::StringValue {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn bulk(data: Option<Vec<u8>>) -> Self {
        Response::Bulk {
            data,
            is_error: false,
        }
    }

    pub fn multi_bulk(items: Option<MultiBulkItems>) -> Self {
        Response::MultiBulk {
            items,
            is_error: false,
        }
    }

    // =========================================================================
    // Lenient accessors
    //
    // Reading a variant other than the stored one yields a zero value.
    // Check `is_error()` or `response_shape()` first.
    // =========================================================================

    pub fn is_error(&self) -> bool {
        match self {
            Response::Status { is_error, .. }
            | Response::Boolean { is_error, .. }
            | Response::Number { is_error, .. }
            | Response::StringValue { is_error, .. }
            | Response::Bulk { is_error, .. }
            | Response::MultiBulk { is_error, .. } => *is_error,
        }
    }

    /// Status or error text; empty for other variants
    pub fn message(&self) -> &str {
        match self {
            Response::Status { text, .. } => text.as_str(),
            _ => "",
        }
    }

    pub fn boolean_value(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    pub fn number_value(&self) -> i64 {
        self.as_number().unwrap_or(0)
    }

    pub fn string_value(&self) -> &str {
        self.as_string().unwrap_or("")
    }

    pub fn bulk_data(&self) -> Option<&[u8]> {
        self.as_bulk().flatten()
    }

    pub fn multi_bulk_data(&self) -> Option<&[Option<Vec<u8>>]> {
        self.as_multi_bulk().flatten()
    }

    // =========================================================================
    // Strict accessors: `None` when the stored variant differs
    // =========================================================================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Response::Boolean { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Response::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Response::StringValue { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Outer `None`: not a bulk reply. `Some(None)`: nil bulk.
    pub fn as_bulk(&self) -> Option<Option<&[u8]>> {
        match self {
            Response::Bulk { data, .. } => Some(data.as_deref()),
            _ => None,
        }
    }

    /// Outer `None`: not a multi-bulk reply. `Some(None)`: nil array.
    pub fn as_multi_bulk(&self) -> Option<Option<&[Option<Vec<u8>>]>> {
        match self {
            Response::MultiBulk { items, .. } => Some(items.as_deref()),
            _ => None,
        }
    }

    /// Shape of the stored variant
    pub fn response_shape(&self) -> ResponseShape {
        match self {
            Response::Status { .. } => ResponseShape::Status,
            Response::Boolean { .. } => ResponseShape::Boolean,
            Response::Number { .. } => ResponseShape::Number,
            Response::StringValue { .. } => ResponseShape::String,
            Response::Bulk { .. } => ResponseShape::Bulk,
            Response::MultiBulk { .. } => ResponseShape::MultiBulk,
        }
    }
}

fn write_bulk(f: &mut fmt::Formatter<'_>, data: Option<&[u8]>) -> fmt::Result {
    match data {
        Some(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
        None => f.write_str("(nil)"),
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Status { text, is_error: true } => write!(f, "(error) {}", text),
            Response::Status { text, .. } => f.write_str(text),
            Response::Boolean { value, .. } => write!(f, "(integer) {}", u8::from(*value)),
            Response::Number { value, .. } => write!(f, "(integer) {}", value),
            Response::StringValue { text, .. } => f.write_str(text),
            Response::Bulk { data, .. } => write_bulk(f, data.as_deref()),
            Response::MultiBulk { items: None, .. } => f.write_str("(nil)"),
            Response::MultiBulk { items: Some(items), .. } if items.is_empty() => {
                f.write_str("(empty list)")
            }
            Response::MultiBulk { items: Some(items), .. } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) ", i + 1)?;
                    write_bulk(f, item.as_deref())?;
                }
                Ok(())
            }
        }
    }
}
