//! Request handlers grouped by resource.

pub mod project;
pub mod task;
