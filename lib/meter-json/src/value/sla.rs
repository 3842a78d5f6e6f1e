/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use serde_json::Value;

use meter_sla::SlaBoundary;

pub fn as_sla_boundary(v: &Value) -> anyhow::Result<SlaBoundary> {
    match v {
        Value::String(s) => {
            SlaBoundary::parse(s).map_err(|e| anyhow!("invalid sla boundary string {s}: {e}"))
        }
        Value::Number(n) => n
            .as_i64()
            .map(SlaBoundary::from_count)
            .ok_or_else(|| anyhow!("sla boundary number {n} is not a valid i64 value")),
        _ => Err(anyhow!(
            "json value type for 'sla boundary' should be 'string' or 'number'"
        )),
    }
}

pub fn as_sla_boundary_list(v: &Value) -> anyhow::Result<Vec<SlaBoundary>> {
    match v {
        Value::Array(seq) => {
            let mut list = Vec::with_capacity(seq.len());
            for (i, v) in seq.iter().enumerate() {
                let b = as_sla_boundary(v).context(format!("invalid value for list element #{i}"))?;
                list.push(b);
            }
            Ok(list)
        }
        _ => {
            let b = as_sla_boundary(v).context("invalid single value for the list")?;
            Ok(vec![b])
        }
    }
}
