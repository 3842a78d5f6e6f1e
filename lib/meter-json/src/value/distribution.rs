/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use serde_json::{Map, Value};

use meter_sla::{DistributionConfig, LOOKUP_FALLBACK_KEY};
use meter_types::MeterName;

fn foreach_lookup_kv<F>(v: &Value, name: &str, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Value) -> anyhow::Result<()>,
{
    let Value::Object(map) = v else {
        return Err(anyhow!("json value type for '{name}' should be 'map'"));
    };
    for (k, v) in map {
        if k != LOOKUP_FALLBACK_KEY {
            MeterName::from_str(k).map_err(|e| anyhow!("invalid meter name prefix {k}: {e}"))?;
        }
        f(k, v).context(format!("failed to parse value of key {k}"))?;
    }
    Ok(())
}

fn as_bool(v: &Value) -> anyhow::Result<bool> {
    match v {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid json string value for 'bool': {s}")),
        },
        _ => Err(anyhow!(
            "json value type for 'bool' should be 'boolean' or 'string'"
        )),
    }
}

fn as_percentile_list(v: &Value) -> anyhow::Result<Vec<f64>> {
    let as_f64 = |v: &Value| {
        v.as_f64()
            .ok_or_else(|| anyhow!("json value type for 'percentile' should be 'number'"))
    };
    match v {
        Value::Array(seq) => seq.iter().map(as_f64).collect(),
        _ => Ok(vec![as_f64(v)?]),
    }
}

fn parse_distribution_map(map: &Map<String, Value>) -> anyhow::Result<DistributionConfig> {
    let mut config = DistributionConfig::default();
    for (k, v) in map {
        let r = match crate::key::normalize(k).as_str() {
            "percentiles_histogram" => foreach_lookup_kv(v, k, |name, v| {
                let enable = as_bool(v)?;
                config.set_percentiles_histogram(name, enable);
                Ok(())
            }),
            "percentiles" => foreach_lookup_kv(v, k, |name, v| {
                let list = as_percentile_list(v)?;
                config.set_percentiles(name, list)?;
                Ok(())
            }),
            "sla" => foreach_lookup_kv(v, k, |name, v| {
                let list = crate::value::as_sla_boundary_list(v)?;
                config.set_sla(name, list);
                Ok(())
            }),
            _ => Err(anyhow!("invalid key {k}")),
        };
        r.context(format!("failed to parse value of key {k}"))?;
    }
    Ok(config)
}

pub fn as_distribution_config(v: &Value) -> anyhow::Result<DistributionConfig> {
    match v {
        Value::Object(map) => parse_distribution_map(map),
        Value::Null => Ok(DistributionConfig::default()),
        _ => Err(anyhow!(
            "json value type for 'distribution config' should be 'map'"
        )),
    }
}
