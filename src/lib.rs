//! pomo - a terminal Pomodoro timer
//!
//! Alternates 25 minute focus intervals with 5 minute breaks, and a 15
//! minute break after every fourth pomodoro. Each interval draws a live
//! progress bar and plays a sound (or rings the bell) when it ends.

pub mod config;
pub mod error;
pub mod format;
pub mod notify;
pub mod session;
pub mod signal;
pub mod timer;

pub use config::Config;
pub use error::{Error, Result};
pub use notify::{BellNotifier, Notifier, SoundNotifier};
pub use session::{BreakKind, Phase, Session, SessionSummary};
pub use signal::{Signal, Signals};
pub use timer::{Countdown, Interval, Outcome};
