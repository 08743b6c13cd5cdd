use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flatdec_core::handle_buf;
use flatdec_core::sf::bstream;
use flatdec_core::sf::ethereum::r#type::v2::{Block, BlockHeader, Log, TransactionReceipt, TransactionTrace};
use flatdec_core::sf::pbtime::Timestamp;
use prost::Message;

const FRAMES: usize = 20;
const TRACES_PER_BLOCK: usize = 50;

fn sample_block(number: u64) -> Block {
    let traces = (0..TRACES_PER_BLOCK as u64)
        .map(|i| TransactionTrace {
            nonce: i,
            gas_limit: 21_000,
            gas_used: 21_000,
            index: i as u32,
            hash: vec![i as u8; 32],
            from: vec![0x11; 20],
            to: vec![0x22; 20],
            receipt: Some(TransactionReceipt {
                cumulative_gas_used: 21_000 * (i + 1),
                logs_bloom: vec![0; 256],
                logs: vec![Log {
                    address: vec![0x33; 20],
                    topics: vec![vec![0x44; 32]],
                    data: vec![0x55; 64],
                    index: 0,
                    block_index: i as u32,
                    ordinal: i,
                }],
                ..Default::default()
            }),
            ..Default::default()
        })
        .collect();

    Block {
        ver: 3,
        hash: vec![0xaa; 32],
        number,
        size: 50_000,
        header: Some(BlockHeader {
            number,
            receipt_root: vec![1; 32],
            transactions_root: vec![2; 32],
            logs_bloom: vec![0; 256],
            gas_limit: 30_000_000,
            gas_used: 21_000 * TRACES_PER_BLOCK as u64,
            timestamp: Some(Timestamp {
                seconds: 1_689_167_123,
                nanos: 0,
            }),
            ..Default::default()
        }),
        transaction_traces: traces,
        ..Default::default()
    }
}

fn sample_container() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"dbin");
    buf.push(0);
    buf.extend_from_slice(b"ETH");
    buf.extend_from_slice(b"99");
    for i in 0..FRAMES as u64 {
        let frame = bstream::v1::Block {
            number: 17_000_000 + i,
            payload_kind: bstream::v1::BlockKind::Protobuf as i32,
            payload_version: 2,
            payload_buffer: sample_block(17_000_000 + i).encode_to_vec(),
            ..Default::default()
        }
        .encode_to_vec();
        buf.extend_from_slice(&(frame.len() as u32).to_be_bytes());
        buf.extend_from_slice(&frame);
    }
    buf
}

fn bench(c: &mut Criterion) {
    let container = sample_container();

    let mut group = c.benchmark_group("decode");
    group.bench_function("handle-buf", |b| {
        b.iter(|| handle_buf(black_box(&container)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
