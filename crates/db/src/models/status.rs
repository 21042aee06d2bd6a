//! Status enum backed by the `project_status` PostgreSQL enum type.
//!
//! The store names the final member `done`; on the wire it is `full_clean`.
//! Clients may also send `done`, which is read as the same member.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project. Any member may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    #[serde(rename = "full_clean", alias = "done")]
    Done,
}

/// Tasks share the project status vocabulary and column type.
pub type TaskStatus = ProjectStatus;
