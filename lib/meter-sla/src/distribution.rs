/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;

use log::debug;

use meter_types::{MeterName, MeterType};

use crate::{DistributionConfigError, SlaBoundary};

/// The key whose value is used when no prefix of the meter name matches.
pub const LOOKUP_FALLBACK_KEY: &str = "all";

/// Distribution statistic settings, keyed by meter name prefix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistributionConfig {
    percentiles_histogram: BTreeMap<String, bool>,
    percentiles: BTreeMap<String, Vec<f64>>,
    sla: BTreeMap<String, Vec<SlaBoundary>>,
}

fn lookup<'a, T>(map: &'a BTreeMap<String, T>, name: &MeterName) -> Option<&'a T> {
    name.prefixes()
        .find_map(|prefix| map.get(prefix))
        .or_else(|| map.get(LOOKUP_FALLBACK_KEY))
}

impl DistributionConfig {
    pub fn is_empty(&self) -> bool {
        self.percentiles_histogram.is_empty() && self.percentiles.is_empty() && self.sla.is_empty()
    }

    pub fn set_percentiles_histogram(&mut self, key: &str, enable: bool) {
        self.percentiles_histogram.insert(key.to_string(), enable);
    }

    pub fn set_percentiles(
        &mut self,
        key: &str,
        percentiles: Vec<f64>,
    ) -> Result<(), DistributionConfigError> {
        if let Some(p) = percentiles.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(DistributionConfigError::PercentileOutOfRange(*p));
        }
        self.percentiles.insert(key.to_string(), percentiles);
        Ok(())
    }

    pub fn set_sla(&mut self, key: &str, boundaries: Vec<SlaBoundary>) {
        self.sla.insert(key.to_string(), boundaries);
    }

    pub fn percentiles_histogram(&self, name: &MeterName) -> Option<bool> {
        lookup(&self.percentiles_histogram, name).copied()
    }

    pub fn percentiles(&self, name: &MeterName) -> Option<&[f64]> {
        lookup(&self.percentiles, name).map(|v| v.as_slice())
    }

    pub fn sla(&self, name: &MeterName) -> Option<&[SlaBoundary]> {
        lookup(&self.sla, name).map(|v| v.as_slice())
    }

    /// Get the sorted histogram bucket boundaries for the meter.
    ///
    /// Boundaries that can not be applied to `meter_type` are skipped, and
    /// `None` is returned if none is left.
    pub fn sla_boundaries(&self, name: &MeterName, meter_type: MeterType) -> Option<Vec<i64>> {
        let boundaries = self.sla(name)?;
        let mut values = Vec::with_capacity(boundaries.len());
        for b in boundaries {
            match b.value_for(meter_type) {
                Some(v) => values.push(v),
                None => debug!("sla boundary {b} is not applicable to {meter_type} meter {name}"),
            }
        }
        if values.is_empty() {
            return None;
        }
        values.sort_unstable();
        values.dedup();
        Some(values)
    }
}
