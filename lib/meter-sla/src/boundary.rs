/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use meter_types::MeterType;

use crate::{DurationConverter, HumanizeDurationConverter, SlaBoundaryError};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// A service level agreement boundary.
///
/// A count is applicable to both timers and distribution summaries, while a
/// duration is only applicable to timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlaBoundary {
    Count(i64),
    Duration(Duration),
}

impl SlaBoundary {
    #[inline]
    pub const fn from_count(value: i64) -> Self {
        SlaBoundary::Count(value)
    }

    #[inline]
    pub const fn from_duration(value: Duration) -> Self {
        SlaBoundary::Duration(value)
    }

    /// Parse the boundary with the default humanize duration converter.
    pub fn parse(text: &str) -> Result<Self, SlaBoundaryError> {
        SlaBoundary::parse_with(text, &HumanizeDurationConverter)
    }

    /// Parse the boundary from configuration text.
    ///
    /// Text made only of decimal digits, from any script, is a count. Anything
    /// else is handed to `converter`. The empty string counts as digits, so it
    /// fails as a number.
    pub fn parse_with<C>(text: &str, converter: &C) -> Result<Self, SlaBoundaryError>
    where
        C: DurationConverter + ?Sized,
    {
        if let Some(digits) = crate::digit::to_ascii_digits(text) {
            let count = i64::from_str(&digits)?;
            Ok(SlaBoundary::Count(count))
        } else {
            let duration = converter.convert(text)?;
            Ok(SlaBoundary::Duration(duration))
        }
    }

    /// Get the value in the form suitable to apply to the given meter type.
    ///
    /// Timer values are in nanoseconds, with counts taken as milliseconds.
    /// Distribution summaries only take counts, as is.
    pub fn value_for(&self, meter_type: MeterType) -> Option<i64> {
        match meter_type {
            MeterType::DistributionSummary => self.distribution_summary_value(),
            MeterType::Timer => Some(self.timer_value()),
            _ => None,
        }
    }

    fn distribution_summary_value(&self) -> Option<i64> {
        match self {
            SlaBoundary::Count(n) => Some(*n),
            SlaBoundary::Duration(_) => None,
        }
    }

    fn timer_value(&self) -> i64 {
        match self {
            SlaBoundary::Count(n) => n.saturating_mul(NANOS_PER_MILLI),
            SlaBoundary::Duration(d) => i64::try_from(d.as_nanos()).unwrap_or(i64::MAX),
        }
    }
}

impl FromStr for SlaBoundary {
    type Err = SlaBoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlaBoundary::parse(s)
    }
}

impl From<i64> for SlaBoundary {
    fn from(value: i64) -> Self {
        SlaBoundary::Count(value)
    }
}

impl From<Duration> for SlaBoundary {
    fn from(value: Duration) -> Self {
        SlaBoundary::Duration(value)
    }
}

impl fmt::Display for SlaBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaBoundary::Count(n) => write!(f, "{n}"),
            SlaBoundary::Duration(d) => write!(f, "{d:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::DurationFormatError;

    const ALL_TYPES: [MeterType; 6] = [
        MeterType::Counter,
        MeterType::Gauge,
        MeterType::LongTaskTimer,
        MeterType::Timer,
        MeterType::DistributionSummary,
        MeterType::Other,
    ];

    #[derive(Default)]
    struct CountingConverter {
        calls: Cell<usize>,
    }

    impl DurationConverter for CountingConverter {
        fn convert(&self, text: &str) -> Result<Duration, DurationFormatError> {
            self.calls.set(self.calls.get() + 1);
            if text == "soon" {
                Ok(Duration::from_millis(7))
            } else {
                Err(DurationFormatError::new(text, "not soon"))
            }
        }
    }

    #[test]
    fn count_text() {
        let b = SlaBoundary::parse("500").unwrap();
        assert_eq!(b, SlaBoundary::Count(500));
        assert_eq!(b.value_for(MeterType::DistributionSummary), Some(500));
        assert_eq!(b.value_for(MeterType::Timer), Some(500_000_000));
    }

    #[test]
    fn duration_text() {
        let b = SlaBoundary::parse("200ms").unwrap();
        assert_eq!(b, SlaBoundary::Duration(Duration::from_millis(200)));
        assert_eq!(b.value_for(MeterType::Timer), Some(200_000_000));
        assert_eq!(b.value_for(MeterType::DistributionSummary), None);

        let b: SlaBoundary = "1h2m".parse().unwrap();
        assert_eq!(b.value_for(MeterType::Timer), Some(3_720_000_000_000));
    }

    #[test]
    fn not_applicable() {
        for b in [
            SlaBoundary::from_count(10),
            SlaBoundary::from_duration(Duration::from_secs(1)),
        ] {
            for t in ALL_TYPES {
                if !matches!(t, MeterType::Timer | MeterType::DistributionSummary) {
                    assert_eq!(b.value_for(t), None);
                }
            }
        }
    }

    #[test]
    fn from_duration() {
        for d in [
            Duration::ZERO,
            Duration::from_nanos(1),
            Duration::new(5, 123_456_789),
            Duration::from_secs(86400 * 365),
        ] {
            let b = SlaBoundary::from_duration(d);
            assert_eq!(b.value_for(MeterType::Timer), Some(d.as_nanos() as i64));
            assert_eq!(SlaBoundary::from(d), b);
        }

        let b = SlaBoundary::from_duration(Duration::MAX);
        assert_eq!(b.value_for(MeterType::Timer), Some(i64::MAX));
    }

    #[test]
    fn from_count() {
        for n in [0, 1, -1, 1000, i64::MIN, i64::MAX] {
            let b = SlaBoundary::from_count(n);
            assert_eq!(b.value_for(MeterType::DistributionSummary), Some(n));
            assert_eq!(SlaBoundary::from(n), b);
        }

        assert_eq!(
            SlaBoundary::from_count(i64::MAX).value_for(MeterType::Timer),
            Some(i64::MAX)
        );
        assert_eq!(
            SlaBoundary::from_count(i64::MIN).value_for(MeterType::Timer),
            Some(i64::MIN)
        );
        assert_eq!(
            SlaBoundary::from_count(-2).value_for(MeterType::Timer),
            Some(-2_000_000)
        );
    }

    #[test]
    fn digits_skip_converter() {
        let c = CountingConverter::default();
        assert_eq!(
            SlaBoundary::parse_with("0", &c).unwrap(),
            SlaBoundary::Count(0)
        );
        assert_eq!(
            SlaBoundary::parse_with("9223372036854775807", &c).unwrap(),
            SlaBoundary::Count(i64::MAX)
        );
        assert_eq!(c.calls.get(), 0);

        assert_eq!(
            SlaBoundary::parse_with("soon", &c).unwrap(),
            SlaBoundary::Duration(Duration::from_millis(7))
        );
        assert_eq!(c.calls.get(), 1);
    }

    #[test]
    fn dyn_converter() {
        let c: &dyn DurationConverter = &HumanizeDurationConverter;
        assert_eq!(
            SlaBoundary::parse_with("1s", c).unwrap(),
            SlaBoundary::Duration(Duration::from_secs(1))
        );
    }

    #[test]
    fn negative_to_converter() {
        let c = CountingConverter::default();
        let e = SlaBoundary::parse_with("-5", &c).unwrap_err();
        assert!(matches!(e, SlaBoundaryError::DurationFormat(_)));
        assert_eq!(c.calls.get(), 1);

        let e = SlaBoundary::parse("-5").unwrap_err();
        assert!(matches!(e, SlaBoundaryError::DurationFormat(_)));
    }

    #[test]
    fn numeric_error() {
        let c = CountingConverter::default();
        let e = SlaBoundary::parse_with("", &c).unwrap_err();
        assert!(matches!(e, SlaBoundaryError::NumericFormat(_)));

        let e = SlaBoundary::parse_with("99999999999999999999", &c).unwrap_err();
        assert!(matches!(e, SlaBoundaryError::NumericFormat(_)));
        assert_eq!(c.calls.get(), 0);
    }

    #[test]
    fn unicode_digits() {
        let c = CountingConverter::default();
        assert_eq!(
            SlaBoundary::parse_with("١٢٣", &c).unwrap(),
            SlaBoundary::Count(123)
        );
        assert_eq!(
            SlaBoundary::parse("١٢٣").unwrap().value_for(MeterType::Timer),
            Some(123_000_000)
        );
        assert_eq!(
            SlaBoundary::parse_with("５００", &c).unwrap(),
            SlaBoundary::Count(500)
        );
        assert_eq!(c.calls.get(), 0);

        let e = SlaBoundary::parse_with("٩٩٩٩٩٩٩٩٩٩٩٩٩٩٩٩٩٩٩٩", &c).unwrap_err();
        assert!(matches!(e, SlaBoundaryError::NumericFormat(_)));
        assert_eq!(c.calls.get(), 0);

        assert!(SlaBoundary::parse_with("١٢ms", &c).is_err());
        assert_eq!(c.calls.get(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(SlaBoundary::from_count(500).to_string(), "500");
        assert_eq!(
            SlaBoundary::from_duration(Duration::from_millis(200)).to_string(),
            "200ms"
        );
    }
}
