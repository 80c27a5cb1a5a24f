#![forbid(unsafe_code)]
//! buildstamp — generates a C header carrying an incrementing build number
//! and build timestamp.

pub mod cli;
pub mod counter;
pub mod error;
pub mod header;
pub mod stamper;
pub mod store;

pub use error::StampError;
pub use stamper::{stamp, StampConfig, StampReport};
pub use store::{CounterStore, StoreKind};
