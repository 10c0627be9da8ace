use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a game sits relative to a point in time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Upcoming,
    Live,
    Ended,
}

/// Badge color token understood by the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Yellow,
    Green,
    Red,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Yellow => "yellow",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
        }
    }
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 3] = [
        LifecycleState::Upcoming,
        LifecycleState::Live,
        LifecycleState::Ended,
    ];

    pub fn color(&self) -> ColorToken {
        match self {
            LifecycleState::Upcoming => ColorToken::Yellow,
            LifecycleState::Live => ColorToken::Green,
            LifecycleState::Ended => ColorToken::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifecycleState::Upcoming => "Upcoming",
            LifecycleState::Live => "Live",
            LifecycleState::Ended => "Ended",
        }
    }
}

/// Classifies a game window against `now`.
///
/// Both bounds are inclusive for `Live`. A window with `end < start` is not
/// rejected: `now < start` is checked first, then `now > end`, so such a
/// window is never `Live`.
pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> LifecycleState {
    if now < start {
        LifecycleState::Upcoming
    } else if now > end {
        LifecycleState::Ended
    } else {
        LifecycleState::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[rstest]
    #[case(day(9), LifecycleState::Upcoming)]
    #[case(day(10), LifecycleState::Live)]
    #[case(day(11), LifecycleState::Live)]
    #[case(day(12), LifecycleState::Live)]
    #[case(day(13), LifecycleState::Ended)]
    fn test_classify_boundaries(#[case] now: DateTime<Utc>, #[case] expected: LifecycleState) {
        assert_eq!(classify(day(10), day(12), now), expected);
    }

    #[test]
    fn test_classify_inverted_window_is_deterministic() {
        // end before start
        let (start, end) = (day(12), day(10));
        assert_eq!(classify(start, end, day(9)), LifecycleState::Upcoming);
        assert_eq!(classify(start, end, day(11)), LifecycleState::Upcoming);
        assert_eq!(classify(start, end, day(12)), LifecycleState::Ended);
        assert_eq!(classify(start, end, day(13)), LifecycleState::Ended);
    }

    #[test]
    fn test_color_mapping_is_total_and_distinct() {
        let colors: HashSet<_> = LifecycleState::ALL.iter().map(|s| s.color()).collect();
        assert_eq!(colors.len(), LifecycleState::ALL.len());
        assert_eq!(LifecycleState::Live.color().as_str(), "green");
    }

    #[test]
    fn test_state_serializes_lowercase() {
        let json = serde_json::to_string(&LifecycleState::Upcoming).unwrap();
        assert_eq!(json, "\"upcoming\"");
    }

    proptest! {
        #[test]
        fn prop_before_start_is_upcoming(start in 0i64..1_000_000, len in 0i64..10_000, before in 1i64..10_000) {
            let s = day(1) + Duration::seconds(start);
            let e = s + Duration::seconds(len);
            prop_assert_eq!(classify(s, e, s - Duration::seconds(before)), LifecycleState::Upcoming);
        }

        #[test]
        fn prop_inside_window_is_live(start in 0i64..1_000_000, len in 0i64..10_000, frac in 0.0f64..=1.0) {
            let s = day(1) + Duration::seconds(start);
            let e = s + Duration::seconds(len);
            let now = s + Duration::seconds((len as f64 * frac) as i64);
            prop_assert_eq!(classify(s, e, now), LifecycleState::Live);
        }

        #[test]
        fn prop_after_end_is_ended(start in 0i64..1_000_000, len in 0i64..10_000, after in 1i64..10_000) {
            let s = day(1) + Duration::seconds(start);
            let e = s + Duration::seconds(len);
            prop_assert_eq!(classify(s, e, e + Duration::seconds(after)), LifecycleState::Ended);
        }
    }
}
