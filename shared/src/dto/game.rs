use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of a create-game request from the admin modal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_window"))]
pub struct GameCreateRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title is required and must be at most 100 characters"
    ))]
    pub title: String,

    pub start: DateTime<Utc>,

    pub end: DateTime<Utc>,
}

fn validate_window(req: &GameCreateRequest) -> Result<(), ValidationError> {
    if req.end < req.start {
        let mut err = ValidationError::new("time_window");
        err.message = Some("End time must not be before start time".into());
        return Err(err);
    }
    Ok(())
}
