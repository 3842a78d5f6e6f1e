/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use meter_sla::SlaBoundary;

pub fn as_sla_boundary(v: &Yaml) -> anyhow::Result<SlaBoundary> {
    match v {
        Yaml::String(s) => {
            SlaBoundary::parse(s).map_err(|e| anyhow!("invalid sla boundary string {s}: {e}"))
        }
        Yaml::Integer(i) => Ok(SlaBoundary::from_count(*i)),
        _ => Err(anyhow!(
            "yaml value type for 'sla boundary' should be 'string' or 'integer'"
        )),
    }
}

/// Get a list of boundaries from a sequence, a comma separated string or a single value.
pub fn as_sla_boundary_list(v: &Yaml) -> anyhow::Result<Vec<SlaBoundary>> {
    match v {
        Yaml::String(s) if s.contains(',') => {
            let mut list = Vec::new();
            for (i, part) in s.split(',').enumerate() {
                let b = SlaBoundary::parse(part.trim())
                    .map_err(|e| anyhow!("invalid sla boundary string {part}: {e}"))
                    .context(format!("invalid value for list element #{i}"))?;
                list.push(b);
            }
            Ok(list)
        }
        _ => crate::value::as_list(v, as_sla_boundary),
    }
}
