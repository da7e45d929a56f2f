//! Data models for the Creamery flavor inventory.
//!
//! Field names follow the wire contract exactly, including the `scoopID` key.

mod flavor;

pub use flavor::*;
