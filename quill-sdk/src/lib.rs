#![deny(missing_docs)]

//! Quill SDK - Bitcoin-style script codec and transaction templates.
//!
//! Re-exports all workspace crates for convenient single-crate usage.

pub use quill_primitives as primitives;
pub use quill_script as script;
pub use quill_transaction as transaction;
pub use quill_transport as transport;
