//! Hand-rolled prost message types for the StreamingFast schemas this crate
//! consumes, laid out under the same module paths the protobuf packages use.
//! Every message derives serde so the JSON projection is the default one.

pub mod bstream;
pub mod ethereum;
pub mod pbtime;
