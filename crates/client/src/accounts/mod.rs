//! On-chain account decoders

pub mod pool;

pub use pool::*;
