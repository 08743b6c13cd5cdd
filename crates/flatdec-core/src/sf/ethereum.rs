//! `sf.ethereum.type.v2` — the Ethereum block schema carried inside the
//! envelope's `payload_buffer`. Subset of the full Firehose schema: the
//! execution-trace `Call` tree and code/storage change records are omitted,
//! unknown fields are skipped by prost on decode.

pub mod r#type {
    pub mod v2 {
        use crate::sf::pbtime::Timestamp;
        use serde::{Deserialize, Serialize};

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct Block {
            #[prost(int32, tag = "1")]
            pub ver: i32,
            #[prost(bytes = "vec", tag = "2")]
            pub hash: Vec<u8>,
            #[prost(uint64, tag = "3")]
            pub number: u64,
            #[prost(uint64, tag = "4")]
            pub size: u64,
            #[prost(message, optional, tag = "5")]
            pub header: Option<BlockHeader>,
            #[prost(message, repeated, tag = "6")]
            pub uncles: Vec<BlockHeader>,
            #[prost(message, repeated, tag = "10")]
            pub transaction_traces: Vec<TransactionTrace>,
            #[prost(message, repeated, tag = "11")]
            pub balance_changes: Vec<BalanceChange>,
        }

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct BlockHeader {
            #[prost(bytes = "vec", tag = "1")]
            pub parent_hash: Vec<u8>,
            #[prost(bytes = "vec", tag = "2")]
            pub uncle_hash: Vec<u8>,
            #[prost(bytes = "vec", tag = "3")]
            pub coinbase: Vec<u8>,
            #[prost(bytes = "vec", tag = "4")]
            pub state_root: Vec<u8>,
            #[prost(bytes = "vec", tag = "5")]
            pub transactions_root: Vec<u8>,
            #[prost(bytes = "vec", tag = "6")]
            pub receipt_root: Vec<u8>,
            #[prost(bytes = "vec", tag = "7")]
            pub logs_bloom: Vec<u8>,
            #[prost(message, optional, tag = "8")]
            pub difficulty: Option<BigInt>,
            #[prost(uint64, tag = "9")]
            pub number: u64,
            #[prost(uint64, tag = "10")]
            pub gas_limit: u64,
            #[prost(uint64, tag = "11")]
            pub gas_used: u64,
            #[prost(message, optional, tag = "12")]
            pub timestamp: Option<Timestamp>,
            #[prost(bytes = "vec", tag = "13")]
            pub extra_data: Vec<u8>,
            #[prost(bytes = "vec", tag = "14")]
            pub mix_hash: Vec<u8>,
            #[prost(uint64, tag = "15")]
            pub nonce: u64,
            #[prost(bytes = "vec", tag = "16")]
            pub hash: Vec<u8>,
            #[prost(message, optional, tag = "17")]
            pub total_difficulty: Option<BigInt>,
            #[prost(message, optional, tag = "18")]
            pub base_fee_per_gas: Option<BigInt>,
        }

        /// Arbitrary-precision unsigned integer, big-endian bytes.
        #[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ::prost::Message)]
        pub struct BigInt {
            #[prost(bytes = "vec", tag = "1")]
            pub bytes: Vec<u8>,
        }

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct TransactionTrace {
            #[prost(bytes = "vec", tag = "1")]
            pub to: Vec<u8>,
            #[prost(uint64, tag = "2")]
            pub nonce: u64,
            #[prost(message, optional, tag = "3")]
            pub gas_price: Option<BigInt>,
            #[prost(uint64, tag = "4")]
            pub gas_limit: u64,
            #[prost(message, optional, tag = "5")]
            pub value: Option<BigInt>,
            #[prost(bytes = "vec", tag = "6")]
            pub input: Vec<u8>,
            #[prost(bytes = "vec", tag = "7")]
            pub v: Vec<u8>,
            #[prost(bytes = "vec", tag = "8")]
            pub r: Vec<u8>,
            #[prost(bytes = "vec", tag = "9")]
            pub s: Vec<u8>,
            #[prost(uint64, tag = "10")]
            pub gas_used: u64,
            #[prost(message, optional, tag = "11")]
            pub max_fee_per_gas: Option<BigInt>,
            #[prost(enumeration = "transaction_trace::Type", tag = "12")]
            pub r#type: i32,
            #[prost(message, optional, tag = "13")]
            pub max_priority_fee_per_gas: Option<BigInt>,
            #[prost(message, repeated, tag = "14")]
            pub access_list: Vec<AccessTuple>,
            #[prost(uint32, tag = "20")]
            pub index: u32,
            #[prost(bytes = "vec", tag = "21")]
            pub hash: Vec<u8>,
            #[prost(bytes = "vec", tag = "22")]
            pub from: Vec<u8>,
            #[prost(bytes = "vec", tag = "23")]
            pub return_data: Vec<u8>,
            #[prost(bytes = "vec", tag = "24")]
            pub public_key: Vec<u8>,
            #[prost(uint64, tag = "25")]
            pub begin_ordinal: u64,
            #[prost(uint64, tag = "26")]
            pub end_ordinal: u64,
            #[prost(enumeration = "transaction_trace::Status", tag = "30")]
            pub status: i32,
            #[prost(message, optional, tag = "31")]
            pub receipt: Option<TransactionReceipt>,
        }

        pub mod transaction_trace {
            use serde::{Deserialize, Serialize};

            #[derive(
                Clone,
                Copy,
                Debug,
                PartialEq,
                Eq,
                Hash,
                PartialOrd,
                Ord,
                Serialize,
                Deserialize,
                ::prost::Enumeration,
            )]
            #[repr(i32)]
            pub enum Type {
                TrxTypeLegacy = 0,
                TrxTypeAccessList = 1,
                TrxTypeDynamicFee = 2,
            }

            #[derive(
                Clone,
                Copy,
                Debug,
                PartialEq,
                Eq,
                Hash,
                PartialOrd,
                Ord,
                Serialize,
                Deserialize,
                ::prost::Enumeration,
            )]
            #[repr(i32)]
            pub enum Status {
                Unknown = 0,
                Succeeded = 1,
                Failed = 2,
                Reverted = 3,
            }
        }

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct TransactionReceipt {
            #[prost(bytes = "vec", tag = "1")]
            pub state_root: Vec<u8>,
            #[prost(uint64, tag = "2")]
            pub cumulative_gas_used: u64,
            #[prost(bytes = "vec", tag = "3")]
            pub logs_bloom: Vec<u8>,
            #[prost(message, repeated, tag = "4")]
            pub logs: Vec<Log>,
        }

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct Log {
            #[prost(bytes = "vec", tag = "1")]
            pub address: Vec<u8>,
            #[prost(bytes = "vec", repeated, tag = "2")]
            pub topics: Vec<Vec<u8>>,
            #[prost(bytes = "vec", tag = "3")]
            pub data: Vec<u8>,
            #[prost(uint32, tag = "4")]
            pub index: u32,
            #[prost(uint32, tag = "6")]
            pub block_index: u32,
            #[prost(uint64, tag = "7")]
            pub ordinal: u64,
        }

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct AccessTuple {
            #[prost(bytes = "vec", tag = "1")]
            pub address: Vec<u8>,
            #[prost(bytes = "vec", repeated, tag = "2")]
            pub storage_keys: Vec<Vec<u8>>,
        }

        #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
        pub struct BalanceChange {
            #[prost(bytes = "vec", tag = "1")]
            pub address: Vec<u8>,
            #[prost(message, optional, tag = "2")]
            pub old_value: Option<BigInt>,
            #[prost(message, optional, tag = "3")]
            pub new_value: Option<BigInt>,
            #[prost(int32, tag = "4")]
            pub reason: i32,
            #[prost(uint64, tag = "5")]
            pub ordinal: u64,
        }
    }
}
