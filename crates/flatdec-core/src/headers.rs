//! Comparison of a decoded block's header roots against reference files.
//!
//! Reference files are JSON, named `{block_number}.json`, with hex-encoded
//! `receipt_root` and `transactions_root` fields.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sf::ethereum::r#type::v2::{Block, BlockHeader};

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("block is missing its header")]
    MissingHeader,

    #[error("invalid {field} length: {value}")]
    InvalidRoot {
        field: &'static str,
        value: String,
    },

    #[error("mismatched roots: expected {expected:?}, got {actual:?}")]
    MismatchedRoots {
        expected: Box<BlockHeaderRoots>,
        actual: Box<BlockHeaderRoots>,
    },
}

/// The two roots a reference file pins down.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeaderRoots {
    #[serde(with = "hex::serde")]
    pub receipt_root: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub transactions_root: Vec<u8>,
}

impl TryFrom<&BlockHeader> for BlockHeaderRoots {
    type Error = HeaderError;

    fn try_from(header: &BlockHeader) -> Result<Self, Self::Error> {
        if header.receipt_root.len() != 32 {
            return Err(HeaderError::InvalidRoot {
                field: "receipt_root",
                value: hex::encode(&header.receipt_root),
            });
        }
        if header.transactions_root.len() != 32 {
            return Err(HeaderError::InvalidRoot {
                field: "transactions_root",
                value: hex::encode(&header.transactions_root),
            });
        }

        Ok(Self {
            receipt_root: header.receipt_root.clone(),
            transactions_root: header.transactions_root.clone(),
        })
    }
}

/// Checks `block` against `{headers_dir}/{number}.json`.
pub fn check_valid_header(block: &Block, headers_dir: &Path) -> Result<(), HeaderError> {
    let reference_path = headers_dir.join(format!("{}.json", block.number));
    let reference_file = File::open(reference_path)?;
    let expected: BlockHeaderRoots = serde_json::from_reader(reference_file)?;

    let header = block.header.as_ref().ok_or(HeaderError::MissingHeader)?;
    let actual = BlockHeaderRoots::try_from(header)?;

    if expected != actual {
        return Err(HeaderError::MismatchedRoots {
            expected: Box::new(expected),
            actual: Box::new(actual),
        });
    }

    Ok(())
}
