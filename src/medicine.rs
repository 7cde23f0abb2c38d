use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::config::{TIME_FORMAT, TIME_FORMAT_EXAMPLE};
use crate::error::{AppError, AppResult};

/// One medicine entry: a name, a daily dosage time, and a repeat flag.
///
/// `time` carries minute precision only; the 12-hour string form
/// ("08:30 AM") is the persisted representation and round-trips exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    #[serde(with = "dose_time")]
    pub time: NaiveTime,
    #[serde(default)]
    pub repeat: bool,
}

impl Medicine {
    /// Parse a 12-hour clock string like "08:30 AM" into a time-of-day
    pub fn parse_time(time_str: &str) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(time_str, TIME_FORMAT)
            .map_err(|_| AppError::time_format(format!("use a time like {}", TIME_FORMAT_EXAMPLE)))
    }

    /// The persisted/displayed form of the dosage time
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// Display line for the list views
    pub fn display_line(&self) -> String {
        if self.repeat {
            format!("{} at {} (Daily)", self.name, self.time_string())
        } else {
            format!("{} at {}", self.name, self.time_string())
        }
    }
}

/// Serde adapter persisting the dosage time as its "%I:%M %p" string
mod dose_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::config::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_time() {
        let time = Medicine::parse_time("08:30 AM").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());

        let evening = Medicine::parse_time("07:45 PM").unwrap();
        assert_eq!(evening, NaiveTime::from_hms_opt(19, 45, 0).unwrap());
    }

    #[test]
    fn test_parse_midnight_and_noon() {
        assert_eq!(
            Medicine::parse_time("12:00 AM").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            Medicine::parse_time("12:00 PM").unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_nonconforming_strings() {
        assert!(matches!(
            Medicine::parse_time("25:99 XM"),
            Err(AppError::TimeFormat(_))
        ));
        assert!(Medicine::parse_time("8h30").is_err());
        assert!(Medicine::parse_time("").is_err());
    }

    #[test]
    fn test_time_string_round_trips() {
        for s in ["08:30 AM", "12:00 AM", "12:00 PM", "11:59 PM", "01:05 AM"] {
            let med = Medicine {
                name: "Aspirin".to_string(),
                time: Medicine::parse_time(s).unwrap(),
                repeat: false,
            };
            assert_eq!(med.time_string(), s);
        }
    }

    #[test]
    fn test_serde_round_trip_preserves_time_string() {
        let med = Medicine {
            name: "Aspirin".to_string(),
            time: Medicine::parse_time("08:30 AM").unwrap(),
            repeat: true,
        };
        let json = serde_json::to_string(&med).unwrap();
        assert!(json.contains("\"08:30 AM\""));

        let back: Medicine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, med);
    }

    #[test]
    fn test_repeat_defaults_to_false_on_read() {
        let med: Medicine =
            serde_json::from_str(r#"{"name": "Ibuprofen", "time": "09:15 PM"}"#).unwrap();
        assert!(!med.repeat);
    }

    #[test]
    fn test_display_line() {
        let mut med = Medicine {
            name: "Aspirin".to_string(),
            time: Medicine::parse_time("08:30 AM").unwrap(),
            repeat: false,
        };
        assert_eq!(med.display_line(), "Aspirin at 08:30 AM");

        med.repeat = true;
        assert_eq!(med.display_line(), "Aspirin at 08:30 AM (Daily)");
    }
}
