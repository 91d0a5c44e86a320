//! Stat counter animation and short-number formatting.
//!
//! The animation is a step function: each call to [`CounterAnimation::advance`]
//! moves the running value forward by the elapsed time and reports what the
//! element should display. The host decides when frames happen (a
//! `requestAnimationFrame` loop in the browser, a plain loop in tests).

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::config::{DEFAULT_COUNTER_DURATION_MS, DEFAULT_FRAME_INTERVAL_MS, SiteConfig};
use crate::error::WidgetError;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Round a non-negative `x` to tenths the way JavaScript's `toFixed(1)` does:
/// nearest tenth of the exact binary value, the larger one on a tie.
///
/// Returns the value in tenths (`1.25` gives `13`, `1.15`, stored as
/// `1.1499…`, gives `11`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_fixed_tenths(x: f64) -> u64 {
    // Sixty places print every finite f64 in this range exactly.
    let exact = format!("{x:.60}");
    let (whole, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let Ok(whole) = whole.parse::<u64>() else {
        return (x * 10.0).round() as u64;
    };
    let mut digits = frac.bytes().map(|b| u64::from(b.saturating_sub(b'0')));
    let tenth = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);
    whole * 10 + tenth + u64::from(round_up)
}

/// Render a count as `1.2M`, `800k`, or `42`.
///
/// Millions keep one decimal (rounded like `toFixed(1)`) with a trailing `.0`
/// dropped; thousands round to
/// the nearest whole `k` (half away from zero, so `2500` is `3k`).
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_short_number(n: u64) -> String {
    if n >= MILLION {
        let tenths = to_fixed_tenths(n as f64 / MILLION as f64);
        if tenths % 10 == 0 {
            format!("{}M", tenths / 10)
        } else {
            format!("{}.{}M", tenths / 10, tenths % 10)
        }
    } else if n >= THOUSAND {
        format!("{}k", (n as f64 / THOUSAND as f64).round() as u64)
    } else {
        n.to_string()
    }
}

/// Parse a `data-target` attribute.
///
/// Leading whitespace and a `+` sign are accepted and parsing stops at the
/// first non-digit, so `"1500 users"` yields `1500`.
///
/// # Errors
///
/// Returns [`WidgetError::InvalidTarget`] when no digits lead the value, the
/// value is negative, or it overflows `u64`.
pub fn parse_target(raw: &str) -> Result<u64, WidgetError> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(WidgetError::InvalidTarget(raw.to_owned()));
    }
    unsigned[..digits_len]
        .parse::<u64>()
        .map_err(|_| WidgetError::InvalidTarget(raw.to_owned()))
}

/// What a counter element should show after a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    /// Whole value currently displayed (the target once done).
    pub value: u64,
    /// Formatted text, with a trailing `+` on the final frame.
    pub text: String,
    /// No further frames are needed.
    pub done: bool,
}

/// One counter's run from zero to its target.
///
/// Runs once. After completion every further step returns the final frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    frame_interval_ms: f64,
    current: f64,
    instant: bool,
    done: bool,
}

impl CounterAnimation {
    /// Animation with the default 16 ms frame.
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self::with_frame_interval(target, duration_ms, DEFAULT_FRAME_INTERVAL_MS)
    }

    /// Animation over the default 2000 ms duration.
    #[must_use]
    pub fn with_default_duration(target: u64) -> Self {
        Self::new(target, DEFAULT_COUNTER_DURATION_MS)
    }

    #[must_use]
    pub fn from_config(target: u64, config: &SiteConfig) -> Self {
        Self::with_frame_interval(target, config.counter_duration_ms, config.frame_interval_ms)
    }

    /// Per-frame increment is `target / (duration / frame_interval)`.
    ///
    /// A non-positive frame count or frame interval completes on the first step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn with_frame_interval(target: u64, duration_ms: f64, frame_interval_ms: f64) -> Self {
        let frames = duration_ms / frame_interval_ms;
        let instant = !(frame_interval_ms > 0.0 && frames.is_finite() && frames > 0.0);
        let increment = if instant { 0.0 } else { target as f64 / frames };
        Self {
            target,
            increment,
            frame_interval_ms,
            current: 0.0,
            instant,
            done: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Running (unfloored) value.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.current
    }

    /// Advance exactly one nominal frame.
    pub fn step(&mut self) -> CounterFrame {
        self.advance(self.frame_interval_ms)
    }

    /// Advance by `elapsed_ms` of wall time and report the frame to render.
    ///
    /// Negative or non-finite elapsed times count as zero, which keeps the
    /// running value non-decreasing.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, elapsed_ms: f64) -> CounterFrame {
        if !self.done {
            let frames = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
                elapsed_ms / self.frame_interval_ms
            } else {
                0.0
            };
            self.current += self.increment * frames;
            if self.instant || self.current >= self.target as f64 {
                self.done = true;
                log::debug!("counter reached target {}", self.target);
            }
        }
        self.frame()
    }

    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn frame(&self) -> CounterFrame {
        if self.done {
            CounterFrame {
                value: self.target,
                text: format!("{}+", format_short_number(self.target)),
                done: true,
            }
        } else {
            let value = self.current.floor().max(0.0) as u64;
            CounterFrame { value, text: format_short_number(value), done: false }
        }
    }
}
