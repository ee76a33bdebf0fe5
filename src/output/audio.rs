//! Audio cues for break reminders and session completion.
//!
//! A cue either runs an external player on a configured sound file or rings
//! the terminal bell. Playback is fire-and-forget; a background thread waits
//! on each player so finished processes are reaped.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::config::AudioConfig;
use crate::error::StudyError;
use crate::timer::NotificationEvent;

/// ASCII bell character.
const BELL: &str = "\x07";

/// Plays the sound for a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCue {
    bell: bool,
    player: Option<String>,
    break_sound: Option<PathBuf>,
    complete_sound: Option<PathBuf>,
}

impl AudioCue {
    /// Build cues from configuration, checking that sound files exist.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::MissingSound` for a configured file that is not there.
    pub fn from_config(config: &AudioConfig) -> Result<Self, StudyError> {
        for sound in [&config.break_sound, &config.complete_sound].into_iter().flatten() {
            if !sound.is_file() {
                return Err(StudyError::MissingSound(sound.clone()));
            }
        }

        Ok(Self {
            bell: config.bell,
            player: config
                .player
                .as_ref()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            break_sound: config.break_sound.clone(),
            complete_sound: config.complete_sound.clone(),
        })
    }

    /// A cue that only ever rings the bell.
    #[must_use]
    pub const fn bell_only() -> Self {
        Self {
            bell: true,
            player: None,
            break_sound: None,
            complete_sound: None,
        }
    }

    /// A cue that makes no sound at all.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            bell: false,
            player: None,
            break_sound: None,
            complete_sound: None,
        }
    }

    /// Build the player command for an event, if one is configured.
    #[must_use]
    pub fn command_for(&self, event: NotificationEvent) -> Option<Command> {
        let sound = match event {
            NotificationEvent::Break => self.break_sound.as_ref(),
            NotificationEvent::Complete => self.complete_sound.as_ref(),
        }?;

        let mut parts = self.player.as_deref()?.split_whitespace();
        let mut command = Command::new(parts.next()?);
        command
            .args(parts)
            .arg(sound)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Some(command)
    }

    /// Play the cue for an event.
    ///
    /// Falls back to the terminal bell on `out` when no player is set up.
    /// Failures are logged, never returned.
    pub fn play<W: Write>(&self, event: NotificationEvent, out: &mut W) {
        if let Some(mut command) = self.command_for(event) {
            match command.spawn() {
                Ok(child) => {
                    debug!(?event, pid = child.id(), "started sound player");
                    reap(child);
                }
                Err(e) => warn!(?event, error = %e, "failed to start sound player"),
            }
            return;
        }

        if self.bell {
            if let Err(e) = out.write_all(BELL.as_bytes()).and_then(|()| out.flush()) {
                warn!(?event, error = %e, "failed to ring terminal bell");
            }
        }
    }
}

/// Wait for a player off the caller's thread.
fn reap(mut child: Child) {
    thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!(%status, "sound player exited with an error"),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "failed to wait for sound player"),
    });
}

impl Default for AudioCue {
    fn default() -> Self {
        Self::bell_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_missing_sound_is_error() {
        let config = AudioConfig {
            break_sound: Some(PathBuf::from("/definitely/not/here/notify.wav")),
            ..AudioConfig::default()
        };

        let err = AudioCue::from_config(&config).unwrap_err();
        assert!(matches!(err, StudyError::MissingSound(p) if p.ends_with("notify.wav")));
    }

    #[test]
    fn test_command_uses_player_and_sound() {
        let temp_dir = TempDir::new().unwrap();
        let notify = temp_dir.path().join("notify.wav");
        std::fs::write(&notify, b"RIFF").unwrap();

        let config = AudioConfig {
            player: Some("paplay --volume 30000".to_string()),
            break_sound: Some(notify.clone()),
            ..AudioConfig::default()
        };
        let cue = AudioCue::from_config(&config).unwrap();

        let command = cue.command_for(NotificationEvent::Break).unwrap();
        assert_eq!(command.get_program(), OsStr::new("paplay"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("--volume"), OsStr::new("30000"), notify.as_os_str()]);

        // No complete sound configured
        assert!(cue.command_for(NotificationEvent::Complete).is_none());
    }

    #[test]
    fn test_sound_without_player_has_no_command() {
        let temp_dir = TempDir::new().unwrap();
        let done = temp_dir.path().join("study_done.wav");
        std::fs::write(&done, b"RIFF").unwrap();

        let config = AudioConfig {
            player: Some("   ".to_string()),
            complete_sound: Some(done),
            ..AudioConfig::default()
        };
        let cue = AudioCue::from_config(&config).unwrap();
        assert!(cue.command_for(NotificationEvent::Complete).is_none());
    }

    #[test]
    fn test_bell_fallback() {
        let mut out = Vec::new();
        AudioCue::bell_only().play(NotificationEvent::Break, &mut out);
        AudioCue::bell_only().play(NotificationEvent::Complete, &mut out);
        assert_eq!(out, b"\x07\x07");
    }

    #[test]
    fn test_silent_cue() {
        let mut out = Vec::new();
        AudioCue::silent().play(NotificationEvent::Break, &mut out);
        assert!(out.is_empty());
    }

    /// Children of this process that have exited but were never waited on.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // Fields after the parenthesised command name: state, ppid, ...
                let rest = stat.rsplit_once(')').map_or("", |(_, rest)| rest);
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_player_processes_are_reaped() {
        let temp_dir = TempDir::new().unwrap();
        let notify = temp_dir.path().join("notify.wav");
        std::fs::write(&notify, b"RIFF").unwrap();

        let config = AudioConfig {
            player: Some("true".to_string()),
            break_sound: Some(notify),
            ..AudioConfig::default()
        };
        let cue = AudioCue::from_config(&config).unwrap();

        let mut out = Vec::new();
        for _ in 0..5 {
            cue.play(NotificationEvent::Break, &mut out);
        }
        assert!(out.is_empty());

        let mut zombies = usize::MAX;
        for _ in 0..50 {
            std::thread::sleep(std::time::Duration::from_millis(100));
            zombies = zombie_children();
            if zombies == 0 {
                break;
            }
        }
        assert_eq!(zombies, 0);
    }

    #[test]
    fn test_default_config_rings_bell() {
        let cue = AudioCue::from_config(&AudioConfig::default()).unwrap();
        assert_eq!(cue, AudioCue::bell_only());
    }
}
