/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use yaml_rust::Yaml;

use meter_types::{MeterName, MeterType};

pub fn as_meter_name(v: &Yaml) -> anyhow::Result<MeterName> {
    if let Yaml::String(s) = v {
        MeterName::from_str(s).map_err(|e| anyhow!("invalid meter name: {e}"))
    } else {
        Err(anyhow!("yaml value type for 'meter name' should be 'string'"))
    }
}

pub fn as_meter_type(v: &Yaml) -> anyhow::Result<MeterType> {
    if let Yaml::String(s) = v {
        MeterType::from_str(s).map_err(|e| anyhow!("invalid meter type: {e}"))
    } else {
        Err(anyhow!("yaml value type for 'meter type' should be 'string'"))
    }
}
