/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

pub fn as_f64(v: &Yaml) -> anyhow::Result<f64> {
    match v {
        Yaml::String(s) => Ok(f64::from_str(s)?),
        Yaml::Integer(i) => Ok(*i as f64),
        Yaml::Real(s) => Ok(f64::from_str(s)?),
        _ => Err(anyhow!(
            "yaml value type for 'f64' should be 'string', 'integer' or 'real'"
        )),
    }
}

pub fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(value) => Ok(*value),
        Yaml::Integer(i) => Ok(*i != 0),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' / 'string' / 'integer'"
        )),
    }
}

/// Convert a sequence, or a single value as a list with one element.
pub fn as_list<T, F>(v: &Yaml, convert: F) -> anyhow::Result<Vec<T>>
where
    F: Fn(&Yaml) -> anyhow::Result<T>,
{
    match v {
        Yaml::Array(seq) => {
            let mut vec = Vec::with_capacity(seq.len());
            for (i, v) in seq.iter().enumerate() {
                let node = convert(v).context(format!("invalid value for list element #{i}"))?;
                vec.push(node);
            }
            Ok(vec)
        }
        _ => {
            let node = convert(v).context("invalid single value for the list")?;
            Ok(vec![node])
        }
    }
}
