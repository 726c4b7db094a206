use std::{cmp, fmt, ops};

use serde::{Deserialize, Serialize};

use crate::UnitFmt;

/// A duration, in seconds. Can be negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

// By construction, Duration is a finite f64.
impl Eq for Duration {}

#[allow(clippy::derive_ord_xor_partial_ord)] // false positive
impl Ord for Duration {
    fn cmp(&self, other: &Duration) -> cmp::Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Duration {
    pub const ZERO: Duration = Duration::const_seconds(0.0);

    /// Creates a duration in seconds.
    pub fn seconds(value: f64) -> Duration {
        if !value.is_finite() {
            panic!("Bad Duration {}", value);
        }

        Duration(value)
    }

    pub const fn const_seconds(value: f64) -> Duration {
        Duration(value)
    }

    /// Converts a wall-clock duration, like the time between two frames.
    pub fn from_std(dt: std::time::Duration) -> Duration {
        Duration::seconds(dt.as_secs_f64())
    }

    /// Returns the duration in seconds. Prefer working in typesafe `Duration`s.
    pub fn inner_seconds(self) -> f64 {
        self.0
    }

    /// Describes the duration according to formatting rules.
    pub fn to_string(self, fmt: &UnitFmt) -> String {
        if fmt.round_durations {
            format!("{}s", self.0.round())
        } else {
            format!("{:.1}s", self.0)
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl ops::Add for Duration {
    type Output = Duration;

    fn add(self, other: Duration) -> Duration {
        Duration::seconds(self.0 + other.0)
    }
}

impl ops::AddAssign for Duration {
    fn add_assign(&mut self, other: Duration) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_std() {
        let dt = Duration::from_std(std::time::Duration::from_millis(1500));
        assert_eq!(dt, Duration::seconds(1.5));
    }

    #[test]
    fn accumulate() {
        let mut total = Duration::ZERO;
        total += Duration::seconds(0.5);
        assert_eq!(total + Duration::seconds(1.0), Duration::seconds(1.5));
        assert!(total < Duration::seconds(1.0));
    }

    #[test]
    fn to_string() {
        let mut fmt = UnitFmt::metric();
        assert_eq!(Duration::seconds(2.26).to_string(&fmt), "2.3s");
        fmt.round_durations = true;
        assert_eq!(Duration::seconds(2.26).to_string(&fmt), "2s");
    }
}
