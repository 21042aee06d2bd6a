pub mod project;
pub mod status;
pub mod task;
