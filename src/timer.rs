/// Timer module for running a single countdown interval
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Result;
use crate::format::{format_time, progress_bar};
use crate::notify::Notifier;
use crate::signal::{Signal, Signals};

/// Carriage return plus "erase to end of line"
pub const CLEAR_LINE: &str = "\r\x1b[K";

#[derive(Debug, Clone, PartialEq)]
pub struct Interval<'a> {
    pub duration: Duration,
    pub label: &'a str,
    /// Pomodoro number shown in the header of work intervals
    pub session: Option<u32>,
}

impl<'a> Interval<'a> {
    pub fn work(duration: Duration, label: &'a str, session: u32) -> Self {
        Self {
            duration,
            label,
            session: Some(session),
        }
    }

    pub fn rest(duration: Duration, label: &'a str) -> Self {
        Self {
            duration,
            label,
            session: None,
        }
    }

    fn header(&self) -> String {
        match self.session {
            Some(n) => format!("🍅 Pomodoro #{}: {}", n, self.label),
            None => format!("☕ {}", self.label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    tick: Duration,
    bar_width: usize,
}

impl Countdown {
    pub fn new(tick: Duration, bar_width: usize) -> Self {
        Self { tick, bar_width }
    }

    /// Run one interval, redrawing the bar every tick.
    ///
    /// Returns `Interrupted` as soon as a Ctrl+C arrives; the notifier only
    /// fires when the full duration has elapsed.
    pub fn run(
        &self,
        interval: &Interval<'_>,
        signals: &Signals,
        out: &mut dyn Write,
        notifier: &dyn Notifier,
    ) -> Result<Outcome> {
        writeln!(out)?;
        writeln!(out, "{}", interval.header())?;
        writeln!(out, "{}", "-".repeat(50))?;
        debug!(label = interval.label, secs = interval.duration.as_secs_f64(), "countdown started");

        let total = interval.duration.as_secs_f64();
        let start = Instant::now();

        loop {
            let elapsed = start.elapsed();
            if elapsed >= interval.duration {
                let full = progress_bar(1.0, 1.0, self.bar_width);
                writeln!(out, "{CLEAR_LINE}  {full}  Done!     ")?;
                out.flush()?;
                notifier.notify(out);
                debug!(label = interval.label, "countdown finished");
                return Ok(Outcome::Completed);
            }

            let elapsed = elapsed.as_secs_f64();
            write!(
                out,
                "{CLEAR_LINE}  {}  {} remaining",
                progress_bar(elapsed, total, self.bar_width),
                format_time(total - elapsed)
            )?;
            out.flush()?;

            let wait = self.tick.min(interval.duration.saturating_sub(start.elapsed()));
            match signals.wait(wait) {
                Some(Signal::Interrupt) => {
                    let remaining = total - start.elapsed().as_secs_f64();
                    writeln!(out, "{CLEAR_LINE}  Timer paused at {}", format_time(remaining))?;
                    out.flush()?;
                    debug!(label = interval.label, "countdown interrupted");
                    return Ok(Outcome::Interrupted);
                }
                // Enter mid-countdown is swallowed; a closed stdin does not
                // stop the clock.
                Some(Signal::Acknowledge | Signal::EndOfInput) | None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::BellNotifier;

    fn render(interval: &Interval<'_>, signals: &Signals) -> (Outcome, String) {
        let countdown = Countdown::new(Duration::from_millis(5), 10);
        let mut out = Vec::new();
        let outcome = countdown.run(interval, signals, &mut out, &BellNotifier).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn zero_length_interval_completes_and_rings() {
        let (_tx, signals) = Signals::channel();
        let (outcome, out) = render(&Interval::rest(Duration::ZERO, "SHORT BREAK"), &signals);

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("☕ SHORT BREAK"));
        assert!(out.contains("[██████████] 100%  Done!"));
        assert!(out.ends_with('\x07'));
    }

    #[test]
    fn short_interval_renders_progress_then_completes() {
        let (_tx, signals) = Signals::channel();
        let interval = Interval::work(Duration::from_millis(30), "FOCUS TIME", 2);
        let (outcome, out) = render(&interval, &signals);

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("🍅 Pomodoro #2: FOCUS TIME"));
        assert!(out.contains("00:00 remaining"));
        assert!(out.contains(CLEAR_LINE));
    }

    #[test]
    fn interrupt_pauses_without_notifying() {
        let (tx, signals) = Signals::channel();
        tx.send(Signal::Interrupt).unwrap();
        let interval = Interval::work(Duration::from_secs(65), "FOCUS TIME", 1);
        let (outcome, out) = render(&interval, &signals);

        assert_eq!(outcome, Outcome::Interrupted);
        assert!(out.contains("Timer paused at 01:04"));
        assert!(!out.contains("Done!"));
        assert!(!out.contains('\x07'));
    }

    #[test]
    fn enter_during_countdown_is_ignored() {
        let (tx, signals) = Signals::channel();
        tx.send(Signal::Acknowledge).unwrap();
        tx.send(Signal::EndOfInput).unwrap();
        let interval = Interval::rest(Duration::from_millis(20), "LONG BREAK");
        let (outcome, _) = render(&interval, &signals);

        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn closed_input_does_not_stop_the_clock() {
        let (tx, signals) = Signals::channel();
        tx.send(Signal::EndOfInput).unwrap();
        let interval = Interval::work(Duration::from_millis(50), "FOCUS TIME", 1);
        let (outcome, out) = render(&interval, &signals);

        assert_eq!(outcome, Outcome::Completed);
        assert!(!out.contains("Timer paused"));
        assert!(out.contains("Done!"));
        assert!(out.ends_with('\x07'));
    }
}
