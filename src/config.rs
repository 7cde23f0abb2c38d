/// Application configuration constants
///
/// Centralized configuration for the medicine reminder app.

/// Directory name under the platform-local data dir
pub const APP_DATA_DIR: &str = "MedicineReminder";

/// Persisted medicine list file name
pub const DATA_FILE: &str = "medicines.json";

/// 12-hour clock format used for dosage times ("08:30 AM")
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Example shown to the user when a time string fails to parse
pub const TIME_FORMAT_EXAMPLE: &str = "08:30 AM or 07:45 PM";

/// How often the scheduler loop scans for due medicines (seconds).
/// Must stay under 60 so every minute gets at least one scan.
pub const SCHEDULER_INTERVAL_SECS: u64 = 30;

/// How often the projector recomputes the upcoming list (seconds)
pub const PROJECTOR_INTERVAL_SECS: u64 = 60;

/// Lookahead window for the upcoming-reminders list (minutes, inclusive)
pub const UPCOMING_WINDOW_MINUTES: i64 = 60;

/// Event emitted to the frontend with the recomputed upcoming list
pub const UPCOMING_EVENT: &str = "upcoming-reminders";

/// Notification title for due medicines
pub const NOTIFICATION_TITLE: &str = "Medicine Reminder";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_interval_covers_every_minute() {
        assert!(SCHEDULER_INTERVAL_SECS > 0);
        assert!(SCHEDULER_INTERVAL_SECS < 60);
    }

    #[test]
    fn test_upcoming_window_is_positive() {
        assert!(UPCOMING_WINDOW_MINUTES > 0);
    }

    #[test]
    fn test_time_format_round_trips() {
        let t = chrono::NaiveTime::parse_from_str("08:30 AM", TIME_FORMAT).unwrap();
        assert_eq!(t.format(TIME_FORMAT).to_string(), "08:30 AM");
    }
}
