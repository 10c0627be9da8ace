use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::error::{Result, SharedError};
use crate::models::lifecycle::{classify, LifecycleState};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A competition as listed on the admin games page
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Server-assigned identifier
    #[validate(range(min = 1, message = "Game id must be a positive integer"))]
    pub id: i64,

    pub title: String,

    /// Poster image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    #[serde(default)]
    pub summary: String,

    pub start: DateTime<Utc>,

    pub end: DateTime<Utc>,
}

impl GameSummary {
    /// Runs the validator rules and maps failures into `SharedError`
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> LifecycleState {
        classify(self.start, self.end, now)
    }

    pub fn status(&self) -> LifecycleState {
        self.status_at(Utc::now())
    }

    /// First character of the title, shown when there is no poster
    pub fn avatar_initial(&self) -> Option<char> {
        self.title.chars().next()
    }

    /// `start` and `end` formatted as `YYYY-MM-DD HH:mm` in `tz`
    pub fn time_range_display<Tz: TimeZone>(&self, tz: &Tz) -> (String, String)
    where
        Tz::Offset: Display,
    {
        (
            self.start.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
            self.end.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn create_test_game() -> GameSummary {
        GameSummary {
            id: 7,
            title: "Winter Qualifier".to_string(),
            poster: None,
            summary: "Open qualifier round".to_string(),
            start: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 12, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_game_validation_success() {
        assert!(create_test_game().validate_fields().is_ok());
    }

    #[test]
    fn test_game_validation_rejects_missing_id() {
        let mut game = create_test_game();
        game.id = 0;
        let result = game.validate_fields();
        assert!(matches!(result, Err(SharedError::Validation(_))));
    }

    #[test]
    fn test_status_at_mid_window() {
        let game = create_test_game();
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
        assert_eq!(game.status_at(now), LifecycleState::Live);
    }

    #[test]
    fn test_avatar_initial() {
        let mut game = create_test_game();
        assert_eq!(game.avatar_initial(), Some('W'));
        game.title = String::new();
        assert_eq!(game.avatar_initial(), None);
    }

    #[test]
    fn test_time_range_display_uses_end() {
        let (start, end) = create_test_game().time_range_display(&Utc);
        assert_eq!(start, "2024-01-10 09:00");
        assert_eq!(end, "2024-01-12 18:30");
    }

    #[test]
    fn test_time_range_display_in_local_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let entered = tz.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let mut game = create_test_game();
        game.start = entered.with_timezone(&Utc);
        game.end = (entered + Duration::hours(2)).with_timezone(&Utc);

        let (start, end) = game.time_range_display(&tz);
        assert_eq!(start, "2024-05-01 10:30");
        assert_eq!(end, "2024-05-01 12:30");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": 3,
            "title": "Spring Cup",
            "summary": "",
            "poster": "https://cdn.example.com/p.png",
            "start": "2024-03-01T00:00:00Z",
            "end": "2024-03-02T00:00:00Z"
        }"#;
        let game: GameSummary = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 3);
        assert_eq!(game.poster.as_deref(), Some("https://cdn.example.com/p.png"));

        let value = serde_json::to_value(create_test_game()).unwrap();
        assert!(value.get("poster").is_none());
        assert_eq!(value["end"], "2024-01-12T18:30:00Z");
    }
}
