//! Parsed flow records.

pub mod types;

pub use types::{FlowGraph, FlowLink, FlowNode};
