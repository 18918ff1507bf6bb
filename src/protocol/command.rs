//! Command descriptors
//!
//! A descriptor tells the codec how to lay out a request and which grammar
//! the reply follows. It carries no behavior of the command itself.

/// How positional arguments are serialized on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestShape {
    NoArg,
    Key,
    KeyKey,
    KeyNum,
    KeySpec,
    KeyNumNum,
    /// Key followed by a length-prefixed raw value
    KeyValue,
    KeyIndexValue,
    KeyKeyValue,
    KeyCountValue,
    MultiKey,
}

impl RequestShape {
    /// Number of arguments the shape takes, or `None` when the shape has no
    /// wire layout yet.
    pub fn arity(self) -> Option<usize> {
        match self {
            RequestShape::NoArg => Some(0),
            RequestShape::Key => Some(1),
            RequestShape::KeyKey
            | RequestShape::KeyNum
            | RequestShape::KeySpec
            | RequestShape::KeyValue => Some(2),
            RequestShape::KeyNumNum => Some(3),
            RequestShape::KeyIndexValue
            | RequestShape::KeyKeyValue
            | RequestShape::KeyCountValue
            | RequestShape::MultiKey => None,
        }
    }

    pub fn is_implemented(self) -> bool {
        self.arity().is_some()
    }
}

/// Which reply grammar the server answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    Boolean,
    Bulk,
    MultiBulk,
    Number,
    Status,
    String,
    /// Reserved for replies synthesized on the client side; not decodable.
    Virtual,
}

/// Immutable descriptor for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    /// Wire command name
    pub code: &'static str,
    pub request_shape: RequestShape,
    pub response_shape: ResponseShape,
}

impl Command {
    pub const fn new(code: &'static str, request_shape: RequestShape, response_shape: ResponseShape) -> Self {
        Self {
            code,
            request_shape,
            response_shape,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
