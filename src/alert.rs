use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Best-effort audible alert for a due medicine.
///
/// Looks for a user-supplied sound asset in the app data dir, falling back
/// to well-known system sounds, and hands playback to an external player.
/// A missing asset, missing player or spawn failure is swallowed — a bad
/// alert must never stop future reminders.
pub fn play_alert(app_data_path: &Path) {
    let candidates = sound_candidates(app_data_path);

    thread::spawn(move || {
        for (player, sound_file) in candidates {
            if sound_file.exists() {
                let _ = Command::new(player)
                    .arg(&sound_file)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn();
                break;
            }
        }
    });
}

fn sound_candidates(app_data_path: &Path) -> Vec<(&'static str, PathBuf)> {
    vec![
        ("paplay", app_data_path.join("notification.wav")),
        ("paplay", app_data_path.join("notification.mp3")),
        (
            "paplay",
            PathBuf::from("/usr/share/sounds/freedesktop/stereo/complete.oga"),
        ),
        ("aplay", PathBuf::from("/usr/share/sounds/sound-icons/prompt.wav")),
        ("afplay", PathBuf::from("/System/Library/Sounds/Glass.aiff")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alert_swallows_missing_assets() {
        // Nonexistent data dir: every candidate may be missing, which must
        // be silent rather than an error.
        play_alert(Path::new("/nonexistent/medicine-reminder-test"));
    }

    #[test]
    fn test_user_asset_is_preferred() {
        let candidates = sound_candidates(Path::new("/data"));
        assert_eq!(candidates[0].1, PathBuf::from("/data/notification.wav"));
    }
}
