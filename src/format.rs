// SPDX-License-Identifier: MPL-2.0
//! Display formatting for entry metadata.
//!
//! Sizes and durations arrive from the backend as raw numbers; these
//! helpers render them the way the tiles show them. Absent metadata
//! renders as `None` and the caller decides whether to show a dash or
//! nothing at all.

/// Formats a byte count as `B`, `KB`, `MB` or `GB` with one decimal.
#[must_use]
pub fn file_size(size_bytes: Option<u64>) -> Option<String> {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes = size_bytes? as f64;
    let formatted = if bytes < KB {
        format!("{} B", bytes as u64)
    } else if bytes < MB {
        format!("{:.1} KB", bytes / KB)
    } else if bytes < GB {
        format!("{:.1} MB", bytes / MB)
    } else {
        format!("{:.1} GB", bytes / GB)
    };
    Some(formatted)
}

/// Formats a millisecond duration as `h:mm:ss`, or `m:ss` under an hour.
#[must_use]
pub fn duration(duration_millis: Option<u64>) -> Option<String> {
    let total_seconds = duration_millis? / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let formatted = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    };
    Some(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_picks_the_right_unit() {
        assert_eq!(file_size(Some(512)).as_deref(), Some("512 B"));
        assert_eq!(file_size(Some(2_048)).as_deref(), Some("2.0 KB"));
        assert_eq!(file_size(Some(5_242_880)).as_deref(), Some("5.0 MB"));
        assert_eq!(file_size(Some(1_610_612_736)).as_deref(), Some("1.5 GB"));
    }

    #[test]
    fn file_size_of_missing_metadata_is_none() {
        assert_eq!(file_size(None), None);
    }

    #[test]
    fn duration_under_an_hour_uses_minutes_and_seconds() {
        assert_eq!(duration(Some(61_000)).as_deref(), Some("1:01"));
        assert_eq!(duration(Some(599_000)).as_deref(), Some("9:59"));
    }

    #[test]
    fn duration_over_an_hour_includes_hours() {
        assert_eq!(duration(Some(3_661_000)).as_deref(), Some("1:01:01"));
        assert_eq!(duration(Some(7_325_000)).as_deref(), Some("2:02:05"));
    }

    #[test]
    fn duration_of_missing_metadata_is_none() {
        assert_eq!(duration(None), None);
    }

    #[test]
    fn sub_second_durations_round_down_to_zero() {
        assert_eq!(duration(Some(900)).as_deref(), Some("0:00"));
    }
}
