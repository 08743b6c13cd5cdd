//! `sf.bstream.v1` — the envelope wrapping every frame of an ETH flat file.

pub mod v1 {
    use crate::sf::pbtime::Timestamp;
    use serde::{Deserialize, Serialize};

    /// Outer envelope. Only `timestamp` and `payload_buffer` matter to the
    /// decode pipeline; the rest travel along for fidelity.
    #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
    pub struct Block {
        #[prost(uint64, tag = "1")]
        pub number: u64,
        #[prost(string, tag = "2")]
        pub id: String,
        #[prost(string, tag = "3")]
        pub previous_id: String,
        #[prost(message, optional, tag = "4")]
        pub timestamp: Option<Timestamp>,
        #[prost(uint64, tag = "5")]
        pub lib_num: u64,
        #[prost(enumeration = "BlockKind", tag = "6")]
        pub payload_kind: i32,
        #[prost(int32, tag = "7")]
        pub payload_version: i32,
        #[prost(bytes = "vec", tag = "8")]
        pub payload_buffer: Vec<u8>,
        #[prost(uint64, tag = "9")]
        pub head_num: u64,
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
    pub enum BlockKind {
        Unknown = 0,
        Protobuf = 1,
        Json = 2,
    }
}
