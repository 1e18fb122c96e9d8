//! Cancellation and acknowledgment events
//!
//! The Ctrl+C handler and a stdin line reader both feed one channel. The
//! timer waits on that channel at every point where it would otherwise
//! sleep or block, so an interrupt is seen as soon as it arrives.

use std::cell::Cell;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Ctrl+C
    Interrupt,
    /// The user pressed Enter
    Acknowledge,
    /// Stdin was closed; no further acknowledgments can arrive
    EndOfInput,
}

pub struct Signals {
    rx: Receiver<Signal>,
    input_closed: Cell<bool>,
}

impl Signals {
    /// A bare channel, for driving the timer from code.
    pub fn channel() -> (Sender<Signal>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::from_receiver(rx))
    }

    pub fn from_receiver(rx: Receiver<Signal>) -> Self {
        Self {
            rx,
            input_closed: Cell::new(false),
        }
    }

    /// Install the Ctrl+C handler and start reading lines from stdin.
    pub fn install() -> Result<Self> {
        let (tx, signals) = Self::channel();

        let interrupt = tx.clone();
        ctrlc::set_handler(move || {
            let _ = interrupt.send(Signal::Interrupt);
        })?;

        thread::Builder::new()
            .name("stdin".to_string())
            .spawn(move || forward_lines(io::stdin().lock(), &tx))?;

        Ok(signals)
    }

    /// Wait up to `timeout` for the next signal.
    ///
    /// Returns `None` on timeout. Once every sender is gone the wait simply
    /// sleeps out the timeout, since no interrupt can arrive any more.
    pub fn wait(&self, timeout: Duration) -> Option<Signal> {
        match self.rx.recv_timeout(timeout) {
            Ok(signal) => Some(self.observe(signal)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.input_closed.set(true);
                thread::sleep(timeout);
                None
            }
        }
    }

    /// Block until the next signal. After stdin has closed this only
    /// reports a pending interrupt, or `EndOfInput`.
    pub fn next(&self) -> Signal {
        if self.input_closed.get() {
            return match self.rx.try_recv() {
                Ok(Signal::Interrupt) => Signal::Interrupt,
                _ => Signal::EndOfInput,
            };
        }
        match self.rx.recv() {
            Ok(signal) => self.observe(signal),
            Err(_) => {
                self.input_closed.set(true);
                Signal::EndOfInput
            }
        }
    }

    fn observe(&self, signal: Signal) -> Signal {
        if signal == Signal::EndOfInput {
            debug!("stdin closed");
            self.input_closed.set(true);
        }
        signal
    }
}

/// One `Acknowledge` per line. Line contents are never decoded, so stray
/// non-UTF-8 bytes do not close input.
fn forward_lines<R: BufRead>(reader: R, tx: &Sender<Signal>) {
    for line in reader.split(b'\n') {
        if let Err(err) = line {
            debug!(%err, "stdin read failed");
            break;
        }
        if tx.send(Signal::Acknowledge).is_err() {
            return;
        }
    }
    let _ = tx.send(Signal::EndOfInput);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_one_acknowledgment_per_line() {
        let (tx, signals) = Signals::channel();
        forward_lines("\n\nfoo\n".as_bytes(), &tx);
        drop(tx);

        assert_eq!(signals.next(), Signal::Acknowledge);
        assert_eq!(signals.next(), Signal::Acknowledge);
        assert_eq!(signals.next(), Signal::Acknowledge);
        assert_eq!(signals.next(), Signal::EndOfInput);
    }

    #[test]
    fn invalid_utf8_line_still_acknowledges() {
        let (tx, signals) = Signals::channel();
        forward_lines(&b"\xff\n\n\n"[..], &tx);
        drop(tx);

        assert_eq!(signals.next(), Signal::Acknowledge);
        assert_eq!(signals.next(), Signal::Acknowledge);
        assert_eq!(signals.next(), Signal::Acknowledge);
        assert_eq!(signals.next(), Signal::EndOfInput);
    }

    #[test]
    fn wait_times_out_without_signals() {
        let (_tx, signals) = Signals::channel();
        assert_eq!(signals.wait(Duration::from_millis(10)), None);
    }

    #[test]
    fn wait_returns_pending_interrupt() {
        let (tx, signals) = Signals::channel();
        tx.send(Signal::Interrupt).unwrap();
        assert_eq!(signals.wait(Duration::from_secs(5)), Some(Signal::Interrupt));
    }

    #[test]
    fn closed_input_still_reports_interrupt() {
        let (tx, signals) = Signals::channel();
        tx.send(Signal::EndOfInput).unwrap();
        tx.send(Signal::Interrupt).unwrap();

        assert_eq!(signals.next(), Signal::EndOfInput);
        assert_eq!(signals.next(), Signal::Interrupt);
        assert_eq!(signals.next(), Signal::EndOfInput);
    }

    #[test]
    fn disconnected_channel_sleeps_out_wait_then_ends_input() {
        let (tx, signals) = Signals::channel();
        drop(tx);

        let started = std::time::Instant::now();
        assert_eq!(signals.wait(Duration::from_millis(20)), None);
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(signals.next(), Signal::EndOfInput);
    }
}
