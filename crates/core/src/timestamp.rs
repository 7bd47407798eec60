//! Elapsed-time values in the fixed-width `HH:MM:SS.fff` form.
//! All arithmetic happens on a millisecond count clamped at zero.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3}$").unwrap());

/// A non-negative quantity of elapsed time since `00:00:00.000`.
/// The canonical string form round-trips exactly to and from this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    millis: u64,
}

impl Timestamp {
    /// Wrap a raw millisecond count.
    pub fn from_millis(millis: u64) -> Timestamp {
        Timestamp { millis }
    }

    /// Total milliseconds since `00:00:00.000`.
    pub fn millis(&self) -> u64 {
        self.millis
    }

    /// Parse a canonical `HH:MM:SS.fff` string.
    /// Only an exact full match of the fixed-width form is accepted;
    /// anything else yields `None`.
    pub fn from_canonical(text: &str) -> Option<Timestamp> {
        if !CANONICAL.is_match(text) {
            return None;
        }
        let h: u64 = text[0..2].parse().ok()?;
        let m: u64 = text[3..5].parse().ok()?;
        let s: u64 = text[6..8].parse().ok()?;
        let ms: u64 = text[9..12].parse().ok()?;
        Some(Timestamp::from_millis(((h * 3600) + (m * 60) + s) * 1000 + ms))
    }

    /// Subtract `delta_ms`, flooring at `00:00:00.000`.
    pub fn saturating_sub(self, delta_ms: u64) -> Timestamp {
        Timestamp::from_millis(self.millis.saturating_sub(delta_ms))
    }

    /// Add `delta_ms`. There is no upper clamp; hours past 99 simply
    /// widen the rendered field.
    pub fn add(self, delta_ms: u64) -> Timestamp {
        Timestamp::from_millis(self.millis + delta_ms)
    }
}

impl fmt::Display for Timestamp {
    /// Render as `HH:MM:SS.fff` by cascading integer division through
    /// hours, minutes and seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.millis / 3_600_000;
        let m = (self.millis % 3_600_000) / 60_000;
        let s = (self.millis % 60_000) / 1000;
        let ms = self.millis % 1000;
        write!(f, "{h:02}:{m:02}:{s:02}.{ms:03}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_form() {
        for text in ["00:00:00.000", "01:02:03.456", "99:59:59.999"] {
            let ts = Timestamp::from_canonical(text).unwrap();
            assert_eq!(ts.to_string(), text);
        }
    }

    #[test]
    fn rejects_non_canonical_forms() {
        for text in [
            "0:01",
            "00:01",
            "00:00:00,000",
            "00:00:00.00",
            "00:00:00.000 extra",
            "timestamp",
        ] {
            assert_eq!(Timestamp::from_canonical(text), None);
        }
    }

    #[test]
    fn clamps_subtraction_at_zero() {
        let ts = Timestamp::from_canonical("00:00:00.005").unwrap();
        let clamped = ts.saturating_sub(10);
        assert_eq!(clamped.millis(), 0);
        assert_eq!(clamped.to_string(), "00:00:00.000");
    }

    #[test]
    fn adds_milliseconds() {
        let ts = Timestamp::from_canonical("00:00:10.000").unwrap();
        assert_eq!(ts.add(3000).to_string(), "00:00:13.000");
    }

    #[test]
    fn borrows_across_fields_on_subtraction() {
        let ts = Timestamp::from_canonical("01:00:00.005").unwrap();
        assert_eq!(ts.saturating_sub(10).to_string(), "00:59:59.995");
    }
}
