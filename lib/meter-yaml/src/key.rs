/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Normalize a config key, so `Percentiles-Histogram` matches `percentiles_histogram`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t() {
        assert_eq!(normalize("sla"), "sla");
        assert_eq!(normalize("SLA"), "sla");
        assert_eq!(normalize("percentiles-histogram"), "percentiles_histogram");
        assert_eq!(normalize("Percentiles_Histogram"), "percentiles_histogram");
    }
}
