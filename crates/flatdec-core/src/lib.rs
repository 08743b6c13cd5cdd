//! Decoder for Firehose flat files.
//!
//! Flat files are `.dbin` framed containers whose frames hold
//! `sf.bstream.v1.Block` envelopes; each envelope's `payload_buffer` is a
//! protobuf-encoded `sf.ethereum.type.v2.Block`. This crate reads the
//! container, peels both protobuf layers and hands back the Ethereum blocks,
//! ready for a JSON projection.

pub mod dbin;
pub mod decode;
pub mod error;
pub mod headers;
pub mod sf;

pub use crate::decode::{
    extract_blocks, handle_buf, handle_file, stream_header_records, HeaderRecordWithNumber,
};
pub use crate::error::{DbinError, DecodeError, Result};
