// src/domain/audit/timestamp.rs
//
// Storage and display conversions for audit timestamps. The write side keeps
// the legacy rule: a caller-supplied local wall clock minus a fixed offset,
// reinterpreted as UTC. Existing rows were produced under that rule, so it
// is preserved bit-for-bit rather than replaced with a true zone conversion. The read side uses the full IANA database. Both halves are
// independent pure functions so either can be swapped without touching call
// sites.
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Normalize a caller-supplied local wall clock into the stored instant:
/// subtract the fixed offset and mark the result as UTC.
pub fn to_storage_instant(local: NaiveDateTime, offset_hours: i64) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(local - Duration::hours(offset_hours)))
}

/// Render a stored instant in the configured display zone using the fixed
/// `dd/MM/yyyy HH:mm:ss` pattern.
pub fn to_display_string(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string()
}

/// The current wall clock in the display zone, as fed into
/// [`to_storage_instant`] when a caller records "now".
pub fn local_wall_clock(now: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    now.with_timezone(&tz).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono_tz::Asia::Singapore;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn storage_instant_subtracts_fixed_offset() {
        let stored = to_storage_instant(local(2024, 3, 20, 14, 21, 48), 8);
        assert_eq!(stored, Utc.with_ymd_and_hms(2024, 3, 20, 6, 21, 48).unwrap());
    }

    #[test]
    fn storage_instant_crosses_date_boundary() {
        let stored = to_storage_instant(local(2024, 1, 1, 3, 0, 0), 8);
        assert_eq!(stored, Utc.with_ymd_and_hms(2023, 12, 31, 19, 0, 0).unwrap());
    }

    #[test]
    fn display_string_converts_to_singapore_time() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 20, 6, 21, 48).unwrap();
        assert_eq!(to_display_string(instant, Singapore), "20/03/2024 14:21:48");
    }

    #[test]
    fn write_then_read_round_trips_for_fixed_offset_zones() {
        // Singapore has been fixed at UTC+8 with no DST for the whole range
        // of stored data, so the approximate write rule and the exact read
        // conversion agree.
        let wall = local(2024, 7, 15, 9, 30, 0);
        let stored = to_storage_instant(wall, 8);
        assert_eq!(to_display_string(stored, Singapore), "15/07/2024 09:30:00");
    }

    #[test]
    fn local_wall_clock_reverses_storage_rule() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 6, 21, 48).unwrap();
        let wall = local_wall_clock(now, Singapore);
        assert_eq!(wall, local(2024, 3, 20, 14, 21, 48));
        assert_eq!(to_storage_instant(wall, 8), now);
    }
}
