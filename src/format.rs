//! Text rendering for the countdown display.
//!
//! Both functions are pure: the same inputs always produce the same string.

const FILLED: char = '\u{2588}';
const EMPTY: char = '\u{2591}';

/// Format seconds as `MM:SS`.
///
/// Fractional seconds are truncated. Minutes are not wrapped into hours, so
/// an hour reads `60:00`. Negative and NaN input render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Render `[███░░░] NN%` for `current` out of `total`.
///
/// The fill count is `floor(width * current / total)` clamped to the bar;
/// the percentage is rounded to the nearest whole number.
pub fn progress_bar(current: f64, total: f64, width: usize) -> String {
    let ratio = if total > 0.0 { current / total } else { 1.0 };
    let filled = if total > 0.0 {
        (width as f64 * current / total).floor().clamp(0.0, width as f64) as usize
    } else {
        width
    };

    let mut bar = String::with_capacity(width * FILLED.len_utf8() + 8);
    bar.push('[');
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    bar.push(']');

    format!("{} {:.0}%", bar, ratio * 100.0)
}
