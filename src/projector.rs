use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tauri::{Emitter, Manager};

use crate::config::{PROJECTOR_INTERVAL_SECS, UPCOMING_EVENT, UPCOMING_WINDOW_MINUTES};
use crate::medicine::Medicine;
use crate::AppState;

/// Medicines whose scheduled time today falls within the lookahead window
/// of `now`, inclusive at both ends. The window is always relative to
/// today: a time already passed today is excluded until the date rolls
/// over.
pub fn upcoming(medicines: &[Medicine], now: NaiveDateTime) -> Vec<Medicine> {
    medicines
        .iter()
        .filter(|med| {
            let scheduled = now.date().and_time(med.time);
            let diff = scheduled.signed_duration_since(now);
            diff >= chrono::Duration::zero()
                && diff <= chrono::Duration::minutes(UPCOMING_WINDOW_MINUTES)
        })
        .cloned()
        .collect()
}

pub fn upcoming_lines(medicines: &[Medicine], now: NaiveDateTime) -> Vec<String> {
    upcoming(medicines, now)
        .iter()
        .map(|m| m.display_line())
        .collect()
}

/// Recompute the projection and push the full replacement list to the
/// frontend. Called by the background loop and synchronously after every
/// registry mutation.
pub fn emit_upcoming(app: &tauri::AppHandle, medicines: &[Medicine]) {
    let lines = upcoming_lines(medicines, Local::now().naive_local());
    if let Err(e) = app.emit(UPCOMING_EVENT, &lines) {
        eprintln!("Failed to emit upcoming reminders: {}", e);
    }
}

/// Background projector loop: refreshes the upcoming list every 60 seconds
pub fn run(app: tauri::AppHandle, shutdown: Arc<AtomicBool>) {
    while !shutdown.load(Ordering::Relaxed) {
        {
            let state = app.state::<AppState>();
            let registry = state.lock_registry();
            emit_upcoming(&app, registry.medicines());
        }

        thread::sleep(Duration::from_secs(PROJECTOR_INTERVAL_SECS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn med(name: &str, time_str: &str, repeat: bool) -> Medicine {
        Medicine {
            name: name.to_string(),
            time: Medicine::parse_time(time_str).unwrap(),
            repeat,
        }
    }

    fn at(time_str: &str) -> NaiveDateTime {
        let date: chrono::NaiveDate = "2024-03-01".parse().unwrap();
        date.and_time(Medicine::parse_time(time_str).unwrap())
    }

    #[test]
    fn test_within_window_is_included() {
        let medicines = vec![med("Aspirin", "09:45 AM", false)];
        let list = upcoming(&medicines, at("09:00 AM"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Aspirin");
    }

    #[test]
    fn test_beyond_window_is_excluded() {
        let medicines = vec![med("Aspirin", "10:05 AM", false)];
        assert!(upcoming(&medicines, at("09:00 AM")).is_empty());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let medicines = vec![
            med("Now", "09:00 AM", false),
            med("Edge", "10:00 AM", false),
        ];
        let list = upcoming(&medicines, at("09:00 AM"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_passed_time_today_is_excluded() {
        let medicines = vec![med("Aspirin", "08:30 AM", true)];
        assert!(upcoming(&medicines, at("09:00 AM")).is_empty());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let medicines = vec![
            med("Aspirin", "09:45 AM", false),
            med("Zinc", "09:10 AM", true),
            med("Melatonin", "11:00 PM", false),
        ];
        let now = at("09:00 AM");

        let first = upcoming_lines(&medicines, now);
        let second = upcoming_lines(&medicines, now);
        assert_eq!(first, second);
        assert_eq!(first, vec!["Aspirin at 09:45 AM", "Zinc at 09:10 AM (Daily)"]);
    }
}
