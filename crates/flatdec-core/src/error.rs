use crate::headers::HeaderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Failures while reading the `.dbin` container itself.
#[derive(Debug, Error)]
pub enum DbinError {
    #[error("not a dbin file: bad magic bytes")]
    BadMagic,

    #[error("unsupported dbin version {0}")]
    UnsupportedVersion(u8),

    #[error("header field is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("container truncated mid-frame")]
    TruncatedFrame,

    #[error("start of a new dbin file")]
    StartOfNewFile,

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures anywhere in the decode pipeline.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("dbin container error: {0}")]
    Dbin(#[from] DbinError),

    #[error("invalid content type: {0}")]
    InvalidContentType(String),

    #[error("protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    #[error("block header error: {0}")]
    Header(#[from] HeaderError),

    #[error("block {number} is missing required field {field}")]
    MissingField { number: u64, field: &'static str },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
