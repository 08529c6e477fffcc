//! Common utilities shared by the marten crates.
//!
//! - **Warning System** - deduplicated, colored diagnostics for input the engine
//!   skips (unknown properties, rejected at-rules, unsupported units)

pub mod warning;
