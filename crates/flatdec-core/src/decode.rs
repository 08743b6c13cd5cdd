//! Decode pipeline: container frames → bstream envelope → Ethereum block.

use std::fs::{self, File};
use std::io::{BufReader, Cursor, Read, Write};
use std::path::Path;

use prost::Message;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dbin::DbinFile;
use crate::error::{DecodeError, Result};
use crate::headers::check_valid_header;
use crate::sf;
use crate::sf::ethereum::r#type::v2::Block;

/// Content type flat files must carry for this pipeline.
pub const ETH_CONTENT_TYPE: &str = "ETH";

/// Decodes every frame of a `.dbin` file on disk.
///
/// With `output_dir`, each block is also written as `block-{number}.json`
/// (the directory is created if needed). With `headers_dir`, each block's
/// header roots are checked against `{number}.json` reference files.
pub fn handle_file(
    path: &Path,
    output_dir: Option<&Path>,
    headers_dir: Option<&Path>,
) -> Result<Vec<Block>> {
    let mut reader = BufReader::new(File::open(path)?);
    let dbin_file = DbinFile::try_from_read(&mut reader)?;
    if dbin_file.header.content_type != ETH_CONTENT_TYPE {
        return Err(DecodeError::InvalidContentType(
            dbin_file.header.content_type,
        ));
    }

    if let Some(output_dir) = output_dir {
        fs::create_dir_all(output_dir)?;
    }

    debug!(frames = dbin_file.messages.len(), "decoding container");
    let mut blocks = Vec::with_capacity(dbin_file.messages.len());
    for message in &dbin_file.messages {
        blocks.push(handle_frame(message, output_dir, headers_dir)?);
    }

    Ok(blocks)
}

/// Decodes every frame of a container already held in memory.
pub fn handle_buf(buf: &[u8]) -> Result<Vec<Block>> {
    extract_blocks(Cursor::new(buf))
}

/// Decodes every frame read from `reader`. No content-type requirement, no
/// side effects.
pub fn extract_blocks<R: Read>(mut reader: R) -> Result<Vec<Block>> {
    let dbin_file = DbinFile::try_from_read(&mut reader)?;
    debug!(frames = dbin_file.messages.len(), "decoding container");
    dbin_file
        .messages
        .iter()
        .map(|message| handle_frame(message, None, None))
        .collect()
}

fn handle_frame(
    message: &[u8],
    output_dir: Option<&Path>,
    headers_dir: Option<&Path>,
) -> Result<Block> {
    let block = decode_block_frame(message)?;

    if let Some(headers_dir) = headers_dir {
        check_valid_header(&block, headers_dir)?;
    }

    if let Some(output_dir) = output_dir {
        let json = serde_json::to_string(&block)?;
        fs::write(output_dir.join(format!("block-{}.json", block.number)), json)?;
    }

    Ok(block)
}

/// Peels both protobuf layers off one frame.
pub fn decode_block_frame(frame: &[u8]) -> Result<Block> {
    let envelope = sf::bstream::v1::Block::decode(frame)?;
    let block = Block::decode(envelope.payload_buffer.as_slice())?;
    debug!(number = block.number, "decoded block");
    Ok(block)
}

/// One line of `stream_header_records` output.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderRecordWithNumber {
    pub block_hash: Vec<u8>,
    pub total_difficulty: Vec<u8>,
    pub block_number: u64,
}

/// Decodes blocks from `reader` and writes one JSON header record per block
/// to `writer`, flushing after each line.
pub fn stream_header_records<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<()> {
    let dbin_file = DbinFile::try_from_read(&mut reader)?;
    for message in &dbin_file.messages {
        let block = decode_block_frame(message)?;
        let header = block.header.as_ref().ok_or(DecodeError::MissingField {
            number: block.number,
            field: "header",
        })?;
        let total_difficulty =
            header
                .total_difficulty
                .as_ref()
                .ok_or(DecodeError::MissingField {
                    number: block.number,
                    field: "total_difficulty",
                })?;

        let record = HeaderRecordWithNumber {
            block_hash: block.hash.clone(),
            total_difficulty: total_difficulty.bytes.clone(),
            block_number: block.number,
        };

        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sf::bstream;
    use crate::sf::ethereum::r#type::v2::{BigInt, BlockHeader, TransactionTrace};
    use crate::sf::pbtime::Timestamp;

    fn sample_block(number: u64) -> Block {
        Block {
            ver: 3,
            hash: vec![0xaa; 32],
            number,
            size: 1024,
            header: Some(BlockHeader {
                number,
                receipt_root: vec![1; 32],
                transactions_root: vec![2; 32],
                gas_limit: 30_000_000,
                gas_used: 12_345_678,
                timestamp: Some(Timestamp {
                    seconds: 1_689_167_123,
                    nanos: 0,
                }),
                total_difficulty: Some(BigInt {
                    bytes: vec![0x0b, 0xad],
                }),
                ..Default::default()
            }),
            transaction_traces: vec![TransactionTrace {
                nonce: 3807,
                gas_limit: 149_194,
                index: 0,
                hash: vec![0x5d; 32],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn envelope_frame(block: &Block) -> Vec<u8> {
        bstream::v1::Block {
            number: block.number,
            timestamp: Some(Timestamp {
                seconds: 1_689_167_123,
                nanos: 0,
            }),
            payload_kind: bstream::v1::BlockKind::Protobuf as i32,
            payload_version: 2,
            payload_buffer: block.encode_to_vec(),
            ..Default::default()
        }
        .encode_to_vec()
    }

    fn container(content_type: &[u8; 3], frames: &[Vec<u8>]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"dbin");
        buf.push(0);
        buf.extend_from_slice(content_type);
        buf.extend_from_slice(b"99");
        for frame in frames {
            buf.extend_from_slice(&(frame.len() as u32).to_be_bytes());
            buf.extend_from_slice(frame);
        }
        buf
    }

    #[test]
    fn handle_buf_decodes_all_frames() {
        let first = sample_block(17_686_312);
        let second = sample_block(17_686_313);
        let buf = container(b"ETH", &[envelope_frame(&first), envelope_frame(&second)]);

        let blocks = handle_buf(&buf).unwrap();
        assert_eq!(blocks, vec![first, second]);
    }

    #[test]
    fn handle_file_requires_eth_content_type() {
        let block = sample_block(1);
        let buf = container(b"BTC", &[envelope_frame(&block)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrong.dbin");
        fs::write(&path, buf).unwrap();

        let err = handle_file(&path, None, None).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidContentType(ct) if ct == "BTC"));
    }

    #[test]
    fn handle_file_writes_block_json() {
        let block = sample_block(42);
        let buf = container(b"ETH", &[envelope_frame(&block)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.dbin");
        fs::write(&path, buf).unwrap();
        let out_dir = dir.path().join("out");

        let blocks = handle_file(&path, Some(&out_dir), None).unwrap();
        assert_eq!(blocks.len(), 1);

        let json = fs::read_to_string(out_dir.join("block-42.json")).unwrap();
        let decoded: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, block);
    }

    #[test]
    fn garbage_frame_is_a_protobuf_error() {
        let buf = container(b"ETH", &[vec![0xff, 0xff, 0xff, 0xff]]);
        let err = handle_buf(&buf).unwrap_err();
        assert!(matches!(err, DecodeError::Protobuf(_)));
    }

    #[test]
    fn stream_header_records_writes_one_line_per_block() {
        let first = sample_block(100);
        let second = sample_block(101);
        let buf = container(b"ETH", &[envelope_frame(&first), envelope_frame(&second)]);

        let mut out = Vec::new();
        stream_header_records(Cursor::new(buf), &mut out).unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&out)
            .unwrap()
            .lines()
            .collect();
        assert_eq!(lines.len(), 2);

        let record: HeaderRecordWithNumber = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record.block_number, 100);
        assert_eq!(record.block_hash, vec![0xaa; 32]);
        assert_eq!(record.total_difficulty, vec![0x0b, 0xad]);
    }

    #[test]
    fn stream_header_records_requires_total_difficulty() {
        let mut block = sample_block(7);
        block.header.as_mut().unwrap().total_difficulty = None;
        let buf = container(b"ETH", &[envelope_frame(&block)]);

        let err = stream_header_records(Cursor::new(buf), Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField {
                number: 7,
                field: "total_difficulty"
            }
        ));
    }
}
