//! Codec error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unexpected end of data: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid option tag {0}")]
    InvalidOptionTag(u8),

    #[error("invalid bool byte {0}")]
    InvalidBool(u8),

    #[error("invalid enum variant {variant} (expected < {count})")]
    InvalidEnumVariant { variant: u8, count: usize },

    #[error("{0} trailing bytes after last field")]
    TrailingBytes(usize),

    #[error("value for `{field}` does not match wire type {expected}")]
    TypeMismatch { field: String, expected: String },

    #[error("fixed byte array `{field}` expects {expected} bytes, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("vector length {0} does not fit in a u32 prefix")]
    VecTooLong(usize),

    #[error("invalid json for `{field}`: {reason}")]
    InvalidJson { field: String, reason: String },
}
