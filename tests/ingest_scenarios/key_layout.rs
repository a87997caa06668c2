//! Key layout properties

use proptest::prelude::*;
use zoolanding::{ChronoCalendar, UtcCalendar};

use crate::test_utils::*;

fn key_for(body: &str) -> String {
    let (_store, pipeline) = pipeline();
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let response = rt.block_on(invoke(&pipeline, body));
    body_json(&response)["key"].as_str().unwrap().to_string()
}

proptest! {
    #[test]
    fn millisecond_inputs_appear_unchanged(ts in 1_000_000_000_000i64..9_999_999_999_999) {
        let key = key_for(&format!(r#"{{"appName":"app","timestamp":{ts}}}"#));
        let date = ChronoCalendar.date_of(ts).unwrap();

        prop_assert_eq!(key, format!("app/{date}/{ts}-567890ab.json"));
    }

    #[test]
    fn second_inputs_are_scaled(ts in 0i64..999_999_999_999) {
        let key = key_for(&format!(r#"{{"appName":"app","timestamp":{ts}}}"#));
        let ms = ts * 1000;
        let date = ChronoCalendar.date_of(ms).unwrap();

        prop_assert_eq!(key, format!("app/{date}/{ms}-567890ab.json"));
    }

    #[test]
    fn date_segments_are_zero_padded(ts in 0i64..4_102_444_800) {
        let key = key_for(&format!(r#"{{"appName":"app","timestamp":{ts}}}"#));
        let segments: Vec<&str> = key.split('/').collect();

        prop_assert_eq!(segments.len(), 5);
        prop_assert_eq!(segments[1].len(), 4);
        prop_assert_eq!(segments[2].len(), 2);
        prop_assert_eq!(segments[3].len(), 2);
    }
}
