//! Relative instants and date rendering.
//!
//! All instants are derived from a pinned `base_time` rather than the wall
//! clock, so a seeded batch renders the same dates no matter when it runs.

use chrono::{Duration as ChronoDuration, NaiveDateTime};
use rand::Rng;

use crate::generate::value::Value;
use crate::schema::types::DateFormat;

/// A uniformly random instant within `window` before `base_time`.
pub fn past_instant<R: Rng>(
    rng: &mut R,
    base_time: NaiveDateTime,
    window: ChronoDuration,
) -> NaiveDateTime {
    base_time - offset_within(rng, window)
}

/// A uniformly random instant within `window` after `base_time`.
pub fn future_instant<R: Rng>(
    rng: &mut R,
    base_time: NaiveDateTime,
    window: ChronoDuration,
) -> NaiveDateTime {
    base_time + offset_within(rng, window)
}

fn offset_within<R: Rng>(rng: &mut R, window: ChronoDuration) -> ChronoDuration {
    let millis = window.num_milliseconds().max(1);
    ChronoDuration::milliseconds(rng.random_range(0..millis))
}

/// ISO 8601 with milliseconds and a trailing `Z`: `2024-01-15T10:30:00.000Z`.
pub fn iso_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Render an instant in the requested output format.
///
/// Unix formats produce numbers; every other format produces a string.
pub fn render(format: DateFormat, dt: NaiveDateTime) -> Value {
    match format {
        DateFormat::Iso => Value::owned(iso_timestamp(dt)),
        DateFormat::IsoDate => Value::owned(dt.format("%Y-%m-%d").to_string()),
        DateFormat::IsoTime => Value::owned(dt.format("%H:%M:%S").to_string()),
        DateFormat::Unix => Value::Int(dt.and_utc().timestamp()),
        DateFormat::UnixMs => Value::Int(dt.and_utc().timestamp_millis()),
        DateFormat::Us => Value::owned(dt.format("%m/%d/%Y").to_string()),
        DateFormat::Eu => Value::owned(dt.format("%d/%m/%Y").to_string()),
        DateFormat::Short => Value::owned(dt.format("%b %-d, %Y").to_string()),
        DateFormat::Long => Value::owned(dt.format("%B %-d, %Y").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instant() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_milli_opt(10, 30, 0, 250)
            .unwrap()
    }

    #[test]
    fn test_render_all_formats() {
        let dt = instant();
        assert_eq!(
            render(DateFormat::Iso, dt),
            Value::borrowed("2024-01-05T10:30:00.250Z")
        );
        assert_eq!(render(DateFormat::IsoDate, dt), Value::borrowed("2024-01-05"));
        assert_eq!(render(DateFormat::IsoTime, dt), Value::borrowed("10:30:00"));
        assert_eq!(render(DateFormat::Unix, dt), Value::Int(1_704_450_600));
        assert_eq!(render(DateFormat::UnixMs, dt), Value::Int(1_704_450_600_250));
        assert_eq!(render(DateFormat::Us, dt), Value::borrowed("01/05/2024"));
        assert_eq!(render(DateFormat::Eu, dt), Value::borrowed("05/01/2024"));
        assert_eq!(render(DateFormat::Short, dt), Value::borrowed("Jan 5, 2024"));
        assert_eq!(render(DateFormat::Long, dt), Value::borrowed("January 5, 2024"));
    }

    #[test]
    fn test_past_and_future_windows() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = instant();
        let window = ChronoDuration::days(30);
        for _ in 0..200 {
            let past = past_instant(&mut rng, base, window);
            assert!(past <= base && past > base - window);
            let future = future_instant(&mut rng, base, window);
            assert!(future >= base && future < base + window);
        }
    }
}
