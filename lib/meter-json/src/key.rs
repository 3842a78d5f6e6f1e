/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Normalize a config key, so `Percentiles-Histogram` matches `percentiles_histogram`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}
