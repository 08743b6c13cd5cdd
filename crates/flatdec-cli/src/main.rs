// crates/flatdec-cli/src/main.rs
//
// Linear decode of one flat file: read the dbin header, take the first frame,
// peel the bstream envelope, print its timestamp, decode the Ethereum block
// payload and write it as JSON. Paths are fixed; any failure aborts with the
// error chain. Frames after the first are deliberately ignored.

use std::fs::{self, File};
use std::io::BufReader;

use anyhow::Context;
use prost::Message;
use tracing_subscriber::EnvFilter;

use flatdec_core::dbin::{DbinFile, DbinHeader};
use flatdec_core::sf;

const INPUT_PATH: &str = "example0017686312.dbin";
const OUTPUT_PATH: &str = "out.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run()
}

fn run() -> anyhow::Result<()> {
    let file = File::open(INPUT_PATH).with_context(|| format!("open {INPUT_PATH}"))?;
    let mut reader = BufReader::new(file);

    let header = DbinHeader::read_from(&mut reader).context("read dbin header")?;
    println!("{header}");

    let frame = DbinFile::read_message(&mut reader)
        .context("read first frame")?
        .context("container holds no frames")?;

    let envelope =
        sf::bstream::v1::Block::decode(frame.as_slice()).context("decode bstream envelope")?;
    let timestamp = envelope
        .timestamp
        .as_ref()
        .context("envelope carries no timestamp")?;
    let when = timestamp
        .to_datetime()
        .context("envelope timestamp out of range")?;
    println!("{when}");

    let block = sf::ethereum::r#type::v2::Block::decode(envelope.payload_buffer.as_slice())
        .context("decode ethereum block payload")?;

    let json = serde_json::to_vec(&block).context("serialize block to json")?;
    fs::write(OUTPUT_PATH, json).with_context(|| format!("write {OUTPUT_PATH}"))?;

    tracing::info!(number = block.number, "block written to {OUTPUT_PATH}");
    Ok(())
}
