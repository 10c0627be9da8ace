#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shared::{ColorToken, SharedError};
    use yew_router::Routable;

    use crate::api::games::games_page_url;
    use crate::api::join_url;
    use crate::components::game_create_modal::{build_create_request, parse_datetime_input};
    use crate::components::status_badge::badge_classes;
    use crate::config::Config;
    use crate::Route;

    #[test]
    fn test_page_size_default() {
        assert_eq!(Config::games_page_size(), 30);
    }

    #[rstest]
    #[case("", "/api/edit/games", "/api/edit/games")]
    #[case("https://ctf.example.com", "/api/edit/games", "https://ctf.example.com/api/edit/games")]
    #[case("https://ctf.example.com/", "/api/edit/games", "https://ctf.example.com/api/edit/games")]
    fn test_join_url(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(join_url(base, path), expected);
    }

    #[test]
    fn test_games_page_url() {
        assert_eq!(games_page_url(30, 30), "/api/edit/games?count=30&skip=30");
    }

    #[test]
    fn test_edit_route_matches_router() {
        let route = Route::AdminGameInfo { id: 12 };
        assert_eq!(route.to_path(), shared::edit_route(12));
        assert_eq!(Route::recognize("/admin/games/12/info"), Some(route));
    }

    #[test]
    fn test_badge_classes_distinct() {
        let classes = [
            badge_classes(ColorToken::Yellow),
            badge_classes(ColorToken::Green),
            badge_classes(ColorToken::Red),
        ];
        assert!(classes[0] != classes[1] && classes[1] != classes[2] && classes[0] != classes[2]);
    }

    #[test]
    fn test_parse_datetime_input_applies_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let parsed = parse_datetime_input("2024-05-01T10:30", &tz).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap());
        assert!(parse_datetime_input("", &tz).is_none());
        assert!(parse_datetime_input("yesterday", &tz).is_none());
    }

    #[test]
    fn test_build_create_request() {
        let request = build_create_request("  Summer Finals ", "2024-07-01T09:00", "2024-07-02T18:00", &Utc).unwrap();
        assert_eq!(request.title, "Summer Finals");
        assert_eq!(request.end, Utc.with_ymd_and_hms(2024, 7, 2, 18, 0, 0).unwrap());
    }

    #[rstest]
    #[case("", "2024-07-01T09:00", "2024-07-02T18:00")]
    #[case("Finals", "", "2024-07-02T18:00")]
    #[case("Finals", "2024-07-03T09:00", "2024-07-02T18:00")]
    fn test_build_create_request_rejects(#[case] title: &str, #[case] start: &str, #[case] end: &str) {
        let result = build_create_request(title, start, end, &Utc);
        assert!(matches!(result, Err(SharedError::Validation(_))));
    }
}
