use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tauri::Manager;
use tauri_plugin_notification::NotificationExt;

use crate::alert;
use crate::config::{NOTIFICATION_TITLE, SCHEDULER_INTERVAL_SECS};
use crate::medicine::Medicine;
use crate::AppState;

/// A reminder already fired this run: (name, time string, date)
pub type NotifiedKey = (String, String, NaiveDate);

/// Collect the medicines due at `now` (truncated to the minute).
///
/// A non-repeating medicine fires once per (name, time, day) key for the
/// lifetime of the set; a repeating one fires on every matching scan. The
/// set is never pruned — it only grows over a very long run, which is
/// negligible at this scale.
pub fn due_for_notification(
    medicines: &[Medicine],
    now: NaiveTime,
    today: NaiveDate,
    notified: &mut HashSet<NotifiedKey>,
) -> Vec<Medicine> {
    let mut due = Vec::new();

    for med in medicines {
        if med.time != now {
            continue;
        }
        let key = (med.name.clone(), med.time_string(), today);
        if med.repeat || !notified.contains(&key) {
            notified.insert(key);
            due.push(med.clone());
        }
    }

    due
}

/// Background scheduler loop: scans every 30 seconds and fires native
/// notifications for due medicines. Delivery or sound failures never abort
/// the loop.
pub fn run(app: tauri::AppHandle, shutdown: Arc<AtomicBool>) {
    let mut notified: HashSet<NotifiedKey> = HashSet::new();

    while !shutdown.load(Ordering::Relaxed) {
        let (due, app_data_path) = {
            let state = app.state::<AppState>();
            let registry = state.lock_registry();

            let now = Local::now();
            let minute = truncate_to_minute(now.time());
            let due = due_for_notification(
                registry.medicines(),
                minute,
                now.date_naive(),
                &mut notified,
            );
            (due, registry.app_data_path().to_path_buf())
        };

        for med in &due {
            notify(&app, med, &app_data_path);
        }

        thread::sleep(Duration::from_secs(SCHEDULER_INTERVAL_SECS));
    }
}

fn notify(app: &tauri::AppHandle, med: &Medicine, app_data_path: &PathBuf) {
    let result = app
        .notification()
        .builder()
        .title(NOTIFICATION_TITLE)
        .body(format!("Time to take: {}", med.name))
        .show();

    if let Err(e) = result {
        eprintln!("Failed to deliver notification for {}: {}", med.name, e);
    }

    alert::play_alert(app_data_path);
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
