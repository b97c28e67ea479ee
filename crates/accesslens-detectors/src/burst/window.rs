use crate::{Error, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// Inclusive window measured from a client's first request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstWindow {
    duration: TimeDelta,
}

impl BurstWindow {
    pub const DEFAULT_SECS: f64 = 10.0;

    /// Build a window from fractional seconds, rounded to the millisecond
    pub fn from_secs(secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(Error::InvalidWindow(secs));
        }

        let millis = (secs * 1000.0).round();
        if millis > i64::MAX as f64 {
            return Err(Error::InvalidWindow(secs));
        }

        let duration =
            TimeDelta::try_milliseconds(millis as i64).ok_or(Error::InvalidWindow(secs))?;
        Ok(Self { duration })
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / 1000.0
    }

    /// Count requests inside the window after the earliest one.
    ///
    /// Returns the burst count and the earliest timestamp. Exactly one list
    /// position is treated as the first request; other entries equal to it
    /// fall at a delta of zero and are counted.
    pub fn count(&self, timestamps: &[DateTime<Utc>]) -> (usize, Option<DateTime<Utc>>) {
        let mut sorted = timestamps.to_vec();
        sorted.sort_unstable();

        let Some((&first, rest)) = sorted.split_first() else {
            return (0, None);
        };

        let mut burst_count = 0;
        for &ts in rest {
            // Deltas are non-decreasing once sorted
            if ts - first > self.duration {
                break;
            }
            burst_count += 1;
        }

        (burst_count, Some(first))
    }
}

impl Default for BurstWindow {
    fn default() -> Self {
        Self {
            duration: TimeDelta::seconds(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn at_millis(offsets: &[i64]) -> Vec<DateTime<Utc>> {
        offsets
            .iter()
            .map(|ms| base() + TimeDelta::milliseconds(*ms))
            .collect()
    }

    #[test]
    fn test_default_is_ten_seconds() {
        assert_eq!(BurstWindow::default().duration(), TimeDelta::seconds(10));
        assert_eq!(
            BurstWindow::from_secs(BurstWindow::DEFAULT_SECS).unwrap(),
            BurstWindow::default()
        );
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(matches!(
            BurstWindow::from_secs(-1.0),
            Err(Error::InvalidWindow(_))
        ));
        assert!(BurstWindow::from_secs(f64::NAN).is_err());
        assert!(BurstWindow::from_secs(f64::INFINITY).is_err());
        assert!(BurstWindow::from_secs(0.0).is_ok());
    }

    #[test]
    fn test_first_three_within_window() {
        let window = BurstWindow::default();
        let (count, first) = window.count(&at_millis(&[0, 3_000, 9_000, 15_000]));
        assert_eq!(count, 2);
        assert_eq!(first, Some(base()));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let window = BurstWindow::default();
        assert_eq!(window.count(&at_millis(&[0, 10_000])).0, 1);
        assert_eq!(window.count(&at_millis(&[0, 10_001])).0, 0);
    }

    #[test]
    fn test_single_and_empty() {
        let window = BurstWindow::default();
        assert_eq!(
            window.count(&at_millis(&[42])),
            (0, Some(base() + TimeDelta::milliseconds(42)))
        );
        assert_eq!(window.count(&[]), (0, None));
    }

    #[test]
    fn test_duplicates_of_first_are_counted() {
        let window = BurstWindow::default();
        assert_eq!(window.count(&at_millis(&[0, 0, 0])).0, 2);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let window = BurstWindow::default();
        let (count, first) = window.count(&at_millis(&[15_000, 9_000, 0, 3_000]));
        assert_eq!(count, 2);
        assert_eq!(first, Some(base()));
    }

    #[test]
    fn test_custom_window() {
        let window = BurstWindow::from_secs(2.5).unwrap();
        assert_eq!(window.as_secs_f64(), 2.5);
        assert_eq!(window.count(&at_millis(&[0, 2_500, 2_501])).0, 1);
    }
}
