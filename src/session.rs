//! The work/break cycle
//!
//! A session alternates focus intervals and breaks until the user presses
//! Ctrl+C (or stdin closes while the timer waits for Enter). Every
//! `pomodoros_before_long_break`th pomodoro is followed by a long break.
//!
//! A pomodoro counts as completed as soon as its focus countdown finishes,
//! whether or not the following break is taken.

use std::io::Write;

use tracing::info;

use crate::config::{Config, minutes};
use crate::error::Result;
use crate::notify::Notifier;
use crate::signal::{Signal, Signals};
use crate::timer::{Countdown, Interval, Outcome};

const WORK_LABEL: &str = "FOCUS TIME";
const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    Short,
    Long,
}

impl BreakKind {
    pub fn label(&self) -> &'static str {
        match self {
            BreakKind::Short => "SHORT BREAK",
            BreakKind::Long => "LONG BREAK",
        }
    }
}

/// Which break follows the given pomodoro.
pub fn break_after(pomodoro: u32, every: u32) -> BreakKind {
    if every > 0 && pomodoro % every == 0 {
        BreakKind::Long
    } else {
        BreakKind::Short
    }
}

/// Where the session was when it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
    /// Waiting for Enter between intervals
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub completed: u32,
    /// Break chosen after each completed pomodoro, in order
    pub breaks: Vec<BreakKind>,
    pub ended_in: Phase,
}

pub struct Session<N, W> {
    config: Config,
    signals: Signals,
    notifier: N,
    out: W,
    pomodoros: u32,
}

impl<N: Notifier, W: Write> Session<N, W> {
    pub fn new(config: Config, signals: Signals, notifier: N, out: W) -> Self {
        Self {
            config,
            signals,
            notifier,
            out,
            pomodoros: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run pomodoros until interrupted, then print the summary.
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.banner()?;

        let countdown = Countdown::new(self.config.tick, self.config.bar_width);
        let mut breaks = Vec::new();

        let ended_in = loop {
            self.pomodoros += 1;
            let work = Interval::work(self.config.work, WORK_LABEL, self.pomodoros);
            let outcome = countdown.run(&work, &self.signals, &mut self.out, &self.notifier)?;
            if outcome == Outcome::Interrupted {
                break Phase::Work;
            }

            writeln!(self.out)?;
            writeln!(self.out, "  ✅ Pomodoro #{} complete!", self.pomodoros)?;

            let every = self.config.pomodoros_before_long_break.max(1);
            let kind = break_after(self.pomodoros, every);
            let duration = match kind {
                BreakKind::Long => {
                    writeln!(
                        self.out,
                        "  🎉 You've completed {} pomodoros! Time for a long break.",
                        self.pomodoros
                    )?;
                    self.config.long_break
                }
                BreakKind::Short => {
                    let left = every - self.pomodoros % every;
                    writeln!(self.out, "  ({} more until long break)", left)?;
                    self.config.short_break
                }
            };
            breaks.push(kind);

            write!(self.out, "\n  Press Enter to start break...")?;
            if !self.acknowledged()? {
                break Phase::Waiting;
            }

            let rest = Interval::rest(duration, kind.label());
            let outcome = countdown.run(&rest, &self.signals, &mut self.out, &self.notifier)?;
            if outcome == Outcome::Interrupted {
                break Phase::Break;
            }

            writeln!(self.out, "\n  Break over!")?;
            write!(self.out, "  Press Enter to start next pomodoro...")?;
            if !self.acknowledged()? {
                break Phase::Waiting;
            }
        };

        let completed = match ended_in {
            Phase::Work => self.pomodoros - 1,
            Phase::Break | Phase::Waiting => self.pomodoros,
        };
        info!(completed, ?ended_in, "session ended");

        writeln!(self.out, "\n")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "  Session ended. Completed {} pomodoros.", completed)?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        self.out.flush()?;

        Ok(SessionSummary {
            completed,
            breaks,
            ended_in,
        })
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "   🍅 POMODORO TIMER")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.out,
            "\n  Work: {} min | Short break: {} min | Long break: {} min",
            minutes(self.config.work),
            minutes(self.config.short_break),
            minutes(self.config.long_break)
        )?;
        writeln!(self.out, "  Press Ctrl+C to pause/exit")?;
        Ok(())
    }

    /// Block until Enter. `false` means the session should end.
    fn acknowledged(&mut self) -> Result<bool> {
        self.out.flush()?;
        match self.signals.next() {
            Signal::Acknowledge => Ok(true),
            Signal::Interrupt => Ok(false),
            Signal::EndOfInput => {
                info!("input closed while waiting for Enter");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fourth_pomodoro_gets_a_long_break() {
        let kinds: Vec<_> = (1..=8).map(|n| break_after(n, 4)).collect();
        assert_eq!(
            kinds,
            [
                BreakKind::Short,
                BreakKind::Short,
                BreakKind::Short,
                BreakKind::Long,
                BreakKind::Short,
                BreakKind::Short,
                BreakKind::Short,
                BreakKind::Long,
            ]
        );
    }

    #[test]
    fn zero_cycle_never_selects_long_break() {
        assert_eq!(break_after(4, 0), BreakKind::Short);
    }

    #[test]
    fn break_labels() {
        assert_eq!(BreakKind::Short.label(), "SHORT BREAK");
        assert_eq!(BreakKind::Long.label(), "LONG BREAK");
    }
}
