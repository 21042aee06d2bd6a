//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod patch;
pub mod timestamp;
pub mod types;
pub mod validation;
