use std::process::{Child, Command, Stdio};

use super::AudioHandle;
use crate::ui::Style;

// Players that can decode mp3, in preference order.
const PLAYER_CANDIDATES: &[(&str, &[&str])] = &[
    ("afplay", &[]),
    ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
    ("mpv", &["--no-video", "--really-quiet"]),
    ("mpg123", &["-q"]),
];

/// Audio playback through the first available system player.
///
/// Playback runs in a child process; stopping kills it. A subsequent play
/// starts from the beginning of the audio, so stop doubles as rewind.
pub struct Player {
    current: Option<Child>,
    warned_missing: bool,
}

impl Player {
    pub const fn new() -> Self {
        Self {
            current: None,
            warned_missing: false,
        }
    }

    /// Starts playback of the handle, stopping any playback in progress.
    ///
    /// A missing system player is non-fatal: the audio stays available
    /// through the handle and a single warning is printed.
    pub fn play(&mut self, handle: &AudioHandle) {
        self.stop();

        for (bin, args) in PLAYER_CANDIDATES {
            match Command::new(bin)
                .args(*args)
                .arg(handle.path())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => {
                    self.current = Some(child);
                    return;
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    crate::warn!(
                        "{} Could not start audio player {bin}: {e}",
                        Style::warning("Warning:")
                    );
                    return;
                }
            }
        }

        if !self.warned_missing {
            self.warned_missing = true;
            crate::warn!(
                "{} No audio player found (tried afplay, ffplay, mpv, mpg123); skipping playback",
                Style::warning("Warning:")
            );
        }
    }

    /// Blocks until the current playback finishes. Safe when nothing is
    /// playing.
    pub fn wait(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.wait();
        }
    }

    /// Stops playback. Safe to call when nothing is playing.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    /// Whether a playback process is still running.
    pub fn is_playing(&mut self) -> bool {
        match &mut self.current {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                Ok(Some(_)) | Err(_) => {
                    self.current = None;
                    false
                }
            },
            None => false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_without_playback_is_a_noop() {
        let mut player = Player::new();
        player.stop();
        player.stop();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_new_player_is_not_playing() {
        let mut player = Player::new();
        assert!(!player.is_playing());
    }
}
