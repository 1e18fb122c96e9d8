/// Configuration module for Pomodoro settings
use std::time::Duration;

/// Width of the progress bar in glyphs
pub const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub work: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    pub pomodoros_before_long_break: u32,
    pub tick: Duration,
    pub bar_width: usize,
}

impl Config {
    pub fn standard() -> Self {
        Self {
            work: Duration::from_secs(25 * 60),
            short_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            pomodoros_before_long_break: 4,
            tick: Duration::from_millis(500),
            bar_width: BAR_WIDTH,
        }
    }

    /// Short timers for trying the tool out by hand
    pub fn demo() -> Self {
        Self {
            work: Duration::from_secs(6),
            short_break: Duration::from_secs(3),
            long_break: Duration::from_secs(6),
            ..Self::standard()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}

/// Render a duration as minutes for the banner, e.g. `25` or `0.1`.
pub fn minutes(duration: Duration) -> String {
    format!("{}", duration.as_secs_f64() / 60.0)
}
