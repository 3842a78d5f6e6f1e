/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use meter_sla::{DistributionConfig, LOOKUP_FALLBACK_KEY};
use meter_types::MeterName;

fn check_lookup_key(k: &str) -> anyhow::Result<()> {
    if k != LOOKUP_FALLBACK_KEY {
        MeterName::from_str(k).map_err(|e| anyhow!("invalid meter name prefix {k}: {e}"))?;
    }
    Ok(())
}

fn foreach_lookup_kv<F>(v: &Yaml, name: &str, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    let Yaml::Hash(map) = v else {
        return Err(anyhow!("yaml value type for '{name}' should be 'map'"));
    };
    crate::foreach_kv(map, |k, v| {
        check_lookup_key(k)?;
        f(k, v)
    })
}

fn parse_distribution_map(map: &yaml::Hash) -> anyhow::Result<DistributionConfig> {
    let mut config = DistributionConfig::default();
    crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
        "percentiles_histogram" => foreach_lookup_kv(v, k, |name, v| {
            let enable = crate::value::as_bool(v)
                .context(format!("invalid bool value for meter {name}"))?;
            config.set_percentiles_histogram(name, enable);
            Ok(())
        }),
        "percentiles" => foreach_lookup_kv(v, k, |name, v| {
            let list = crate::value::as_list(v, crate::value::as_f64)
                .context(format!("invalid percentile list for meter {name}"))?;
            config
                .set_percentiles(name, list)
                .context(format!("invalid percentile list for meter {name}"))
        }),
        "sla" => foreach_lookup_kv(v, k, |name, v| {
            let list = crate::value::as_sla_boundary_list(v)
                .context(format!("invalid sla boundary list for meter {name}"))?;
            config.set_sla(name, list);
            Ok(())
        }),
        _ => Err(anyhow!("invalid key {k}")),
    })?;
    Ok(config)
}

pub fn as_distribution_config(v: &Yaml) -> anyhow::Result<DistributionConfig> {
    match v {
        Yaml::Hash(map) => parse_distribution_map(map),
        Yaml::Null => Ok(DistributionConfig::default()),
        _ => Err(anyhow!(
            "yaml value type for 'distribution config' should be 'map'"
        )),
    }
}
