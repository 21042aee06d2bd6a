//! Project entity model, DTOs and the partial-update merge.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskman_core::error::CoreError;
use taskman_core::patch::Patch;
use taskman_core::types::{DbId, Timestamp};
use taskman_core::{timestamp, validation};
use validator::Validate;

use crate::models::status::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_date: Timestamp,
    pub due_date: Timestamp,
    pub status: ProjectStatus,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: String,
    /// RFC 3339, or an ISO datetime without offset read as UTC.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub due_date: Timestamp,
    /// Defaults to `not_started` if omitted.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// DTO for a partial update. Every field may be absent, null or a value.
///
/// `id` and `created_date` are not part of the shape; if a client sends
/// them they are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_patch")]
    pub due_date: Patch<Timestamp>,
    #[serde(default)]
    pub status: Patch<ProjectStatus>,
}

/// The mutable columns of a project after a merge, ready to be written.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProjectValues {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: String,
    pub due_date: Timestamp,
    pub status: ProjectStatus,
}

impl UpdateProject {
    /// `true` when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.due_date.is_absent()
            && self.status.is_absent()
    }

    /// Merge the supplied fields onto `current` and validate the result.
    ///
    /// `status` is checked first so an explicit null status is reported no
    /// matter what else the payload carries.
    pub fn merge_onto(&self, current: &Project) -> Result<ProjectValues, CoreError> {
        let status = self.status.clone().merge_onto(current.status, "status")?;
        let title = self
            .title
            .clone()
            .merge_onto(current.title.clone(), "title")?;
        let description = self
            .description
            .clone()
            .merge_onto(current.description.clone(), "description")?;
        let due_date = self.due_date.clone().merge_onto(current.due_date, "due_date")?;

        let values = ProjectValues {
            title,
            description,
            due_date,
            status,
        };
        validation::validate(&values)?;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn stored() -> Project {
        Project {
            id: 7,
            title: "fake project".into(),
            description: "fake project description".into(),
            created_date: Utc.with_ymd_and_hms(2023, 9, 4, 14, 8, 6).unwrap(),
            due_date: Utc.with_ymd_and_hms(2023, 11, 30, 14, 8, 6).unwrap(),
            status: ProjectStatus::NotStarted,
        }
    }

    fn values_of(project: &Project) -> ProjectValues {
        ProjectValues {
            title: project.title.clone(),
            description: project.description.clone(),
            due_date: project.due_date,
            status: project.status,
        }
    }

    fn update(json: serde_json::Value) -> UpdateProject {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn empty_update_keeps_everything() {
        let current = stored();
        let patch = update(serde_json::json!({}));
        assert!(patch.is_empty());
        assert_eq!(patch.merge_onto(&current).unwrap(), values_of(&current));
    }

    #[test]
    fn title_only_update() {
        let current = stored();
        let merged = update(serde_json::json!({"title": "new fake project"}))
            .merge_onto(&current)
            .unwrap();
        assert_eq!(merged.title, "new fake project");
        assert_eq!(merged.description, current.description);
        assert_eq!(merged.due_date, current.due_date);
        assert_eq!(merged.status, current.status);
    }

    #[test]
    fn status_and_due_date_update() {
        let current = stored();
        let merged = update(serde_json::json!({
            "status": "in_progress",
            "due_date": "2023-12-02T10:05:06Z",
        }))
        .merge_onto(&current)
        .unwrap();
        assert_eq!(merged.status, ProjectStatus::InProgress);
        assert_eq!(
            merged.due_date,
            Utc.with_ymd_and_hms(2023, 12, 2, 10, 5, 6).unwrap()
        );
        assert_eq!(merged.title, current.title);
    }

    #[test]
    fn due_date_without_offset_is_read_as_utc() {
        let merged = update(serde_json::json!({"due_date": "2023-12-02T10:05:06.944969"}))
            .merge_onto(&stored())
            .unwrap();
        assert_eq!(
            merged.due_date,
            Utc.with_ymd_and_hms(2023, 12, 2, 10, 5, 6).unwrap()
                + chrono::Duration::microseconds(944_969)
        );
    }

    #[test]
    fn null_due_date_is_rejected() {
        let patch = update(serde_json::json!({"due_date": null}));
        assert_matches!(
            patch.merge_onto(&stored()),
            Err(CoreError::Validation(msg)) if msg == "due_date cannot be null"
        );
    }

    #[test]
    fn null_status_is_rejected_regardless_of_other_fields() {
        let current = stored();
        let patch = update(serde_json::json!({
            "title": "still fine",
            "description": null,
            "status": null,
        }));
        assert_matches!(
            patch.merge_onto(&current),
            Err(CoreError::Validation(msg)) if msg == "status cannot be null"
        );
    }

    #[test]
    fn null_description_is_rejected() {
        let patch = update(serde_json::json!({"description": null}));
        assert_matches!(
            patch.merge_onto(&stored()),
            Err(CoreError::Validation(msg)) if msg == "description cannot be null"
        );
    }

    #[test]
    fn empty_description_is_allowed() {
        let merged = update(serde_json::json!({"description": ""}))
            .merge_onto(&stored())
            .unwrap();
        assert_eq!(merged.description, "");
    }

    #[test]
    fn empty_title_is_rejected() {
        let patch = update(serde_json::json!({"title": ""}));
        assert_matches!(
            patch.merge_onto(&stored()),
            Err(CoreError::Validation(msg)) if msg == "title: must not be empty"
        );
    }

    #[test]
    fn immutable_fields_are_not_part_of_the_shape() {
        let patch = update(serde_json::json!({
            "id": 99,
            "created_date": "2020-01-01T00:00:00Z",
        }));
        assert!(patch.is_empty());
    }

    #[test]
    fn invalid_status_fails_to_deserialize() {
        let result = serde_json::from_value::<UpdateProject>(serde_json::json!({
            "status": "invalid project type"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_defaults_status_to_absent() {
        let input: CreateProject = serde_json::from_value(serde_json::json!({
            "title": "Project 1",
            "description": "This is a web app project",
            "due_date": "2023-11-30T10:05:06Z",
        }))
        .unwrap();
        assert_eq!(input.status, None);
        assert!(validation::validate(&input).is_ok());
    }

    #[test]
    fn create_accepts_due_date_without_offset() {
        let input: CreateProject = serde_json::from_value(serde_json::json!({
            "title": "fake project",
            "description": "fake project description",
            "due_date": "2023-11-30T14:08:06.365",
        }))
        .unwrap();
        assert_eq!(
            input.due_date,
            Utc.with_ymd_and_hms(2023, 11, 30, 14, 8, 6).unwrap()
                + chrono::Duration::milliseconds(365)
        );
    }

    #[test]
    fn create_rejects_unparseable_due_date() {
        let result = serde_json::from_value::<CreateProject>(serde_json::json!({
            "title": "fake project",
            "description": "",
            "due_date": "30/11/2023",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_requires_description() {
        let result = serde_json::from_value::<CreateProject>(serde_json::json!({
            "title": "test_title",
        }));
        assert!(result.is_err());
    }
}
