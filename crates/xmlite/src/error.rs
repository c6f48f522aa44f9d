//! Error types for xmlite

use std::fmt;
use thiserror::Error;

/// Position in the character buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    /// Character index (not byte offset)
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Error kind
///
/// Every grammar violation is reported as [`ErrorKind::Malformed`]; the
/// message carries what was expected for diagnostics only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    MaxDepthExceeded { max: u16 },
    Encoding,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed xml"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::Encoding => write!(f, "invalid encoding"),
            Self::Io => write!(f, "i/o failure"),
        }
    }
}

/// Main error type for xmlite
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("error at {pos}: {message}")]
pub struct Error {
    kind: ErrorKind,
    pos: Pos,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, pos: Pos) -> Self {
        let message = kind.to_string();
        Self { kind, pos, message }
    }

    pub fn with_message(kind: ErrorKind, pos: Pos, message: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            message: message.into(),
        }
    }

    /// Grammar violation at `pos`
    pub fn malformed(pos: Pos, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Malformed, pos, message)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == ErrorKind::Malformed
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(ErrorKind::Io, Pos::default(), err.to_string())
    }
}

/// Result type alias for xmlite
pub type Result<T> = std::result::Result<T, Error>;
