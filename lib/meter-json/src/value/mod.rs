/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod distribution;
mod sla;

pub use distribution::as_distribution_config;
pub use sla::{as_sla_boundary, as_sla_boundary_list};
