//! Error types for binary VDF encoding and decoding.

use thiserror::Error;

/// Broad classification of codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input ended in the middle of a tag, string, or number.
    TruncatedInput,
    /// Tag byte outside `{0x00, 0x01, 0x02, 0x08}`.
    UnknownTag,
    /// Key or string value is not valid UTF-8.
    InvalidUtf8,
    /// Maps nested deeper than the configured limit.
    LimitExceeded,
    /// Key or string value contains a NUL byte.
    IllegalStringContent,
    /// Value of a shape the format cannot hold at that position.
    UnsupportedValueType,
}

impl ErrorCode {
    /// Returns a stable identifier for this error class (e.g. `"unknown_tag"`).
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::TruncatedInput => "truncated_input",
            ErrorCode::UnknownTag => "unknown_tag",
            ErrorCode::InvalidUtf8 => "invalid_utf8",
            ErrorCode::LimitExceeded => "limit_exceeded",
            ErrorCode::IllegalStringContent => "illegal_string_content",
            ErrorCode::UnsupportedValueType => "unsupported_value_type",
        }
    }
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated input: unexpected end of buffer while reading {context} at byte {position}")]
    UnexpectedEof {
        context: &'static str,
        position: usize,
    },

    #[error("unknown tag 0x{tag:02x} at byte {position}")]
    UnknownTag { tag: u8, position: usize },

    #[error("invalid UTF-8 in {field} at byte {position}")]
    InvalidUtf8 {
        field: &'static str,
        position: usize,
    },

    #[error("maps nested deeper than {max} levels at byte {position}")]
    NestingTooDeep { max: usize, position: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnexpectedEof { .. } => ErrorCode::TruncatedInput,
            DecodeError::UnknownTag { .. } => ErrorCode::UnknownTag,
            DecodeError::InvalidUtf8 { .. } => ErrorCode::InvalidUtf8,
            DecodeError::NestingTooDeep { .. } => ErrorCode::LimitExceeded,
        }
    }

    /// Returns the byte offset at which the error was detected.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::UnexpectedEof { position, .. }
            | DecodeError::UnknownTag { position, .. }
            | DecodeError::InvalidUtf8 { position, .. }
            | DecodeError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} under key {key:?} contains illegal NUL character")]
    IllegalNul { field: &'static str, key: String },

    #[error("unsupported value type: expected map, found {found}")]
    UnsupportedValueType { found: &'static str },

    #[error("maps nested deeper than {max} levels under key {key:?}")]
    NestingTooDeep { max: usize, key: String },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::IllegalNul { .. } => ErrorCode::IllegalStringContent,
            EncodeError::UnsupportedValueType { .. } => ErrorCode::UnsupportedValueType,
            EncodeError::NestingTooDeep { .. } => ErrorCode::LimitExceeded,
        }
    }
}
