//! End-of-interval notification
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

const BELL: &str = "\x07";

pub trait Notifier {
    /// Best effort: failures are swallowed.
    fn notify(&self, out: &mut dyn Write);
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify(&self, out: &mut dyn Write) {
        let _ = out.write_all(BELL.as_bytes());
        let _ = out.flush();
    }
}

/// Plays the first system sound that exists, falling back to the bell.
#[derive(Debug, Clone)]
pub struct SoundNotifier {
    player: String,
    sounds: Vec<PathBuf>,
}

impl SoundNotifier {
    pub fn new(
        player: impl Into<String>,
        sounds: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        Self {
            player: player.into(),
            sounds: sounds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn for_platform() -> Self {
        if cfg!(target_os = "macos") {
            Self::new(
                "afplay",
                [
                    "/System/Library/Sounds/Glass.aiff",
                    "/System/Library/Sounds/Ping.aiff",
                    "/System/Library/Sounds/Pop.aiff",
                ],
            )
        } else if cfg!(target_os = "linux") {
            Self::new(
                "paplay",
                [
                    "/usr/share/sounds/freedesktop/stereo/complete.oga",
                    "/usr/share/sounds/alsa/Front_Left.wav",
                    "/usr/share/sounds/sound-icons/bell.wav",
                ],
            )
        } else {
            Self::new("", Vec::<PathBuf>::new())
        }
    }

    fn play(&self) -> bool {
        let Some(sound) = self.sounds.iter().find(|path| path.exists()) else {
            debug!("no notification sound found");
            return false;
        };

        match Command::new(&self.player)
            .arg(sound)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                debug!(player = %self.player, sound = %sound.display(), "playing notification");
                // Reap in the background so the countdown never waits on playback.
                thread::spawn(move || child.wait());
                true
            }
            Err(err) => {
                debug!(player = %self.player, %err, "could not start sound player");
                false
            }
        }
    }
}

impl Default for SoundNotifier {
    fn default() -> Self {
        Self::for_platform()
    }
}

impl Notifier for SoundNotifier {
    fn notify(&self, out: &mut dyn Write) {
        if !self.play() {
            BellNotifier.notify(out);
        }
    }
}
