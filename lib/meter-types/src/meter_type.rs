/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// The kind of instrument a value is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeterType {
    Counter,
    Gauge,
    LongTaskTimer,
    Timer,
    DistributionSummary,
    Other,
}

impl MeterType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MeterType::Counter => "counter",
            MeterType::Gauge => "gauge",
            MeterType::LongTaskTimer => "long_task_timer",
            MeterType::Timer => "timer",
            MeterType::DistributionSummary => "distribution_summary",
            MeterType::Other => "other",
        }
    }
}

impl FromStr for MeterType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "counter" => Ok(MeterType::Counter),
            "gauge" => Ok(MeterType::Gauge),
            "long_task_timer" => Ok(MeterType::LongTaskTimer),
            "timer" => Ok(MeterType::Timer),
            "distribution_summary" | "summary" => Ok(MeterType::DistributionSummary),
            "other" => Ok(MeterType::Other),
            _ => Err(ParseError::UnknownMeterType(s.to_string())),
        }
    }
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
