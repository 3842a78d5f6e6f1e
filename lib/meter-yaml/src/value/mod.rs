/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod distribution;
mod meter;
mod primary;
mod sla;

pub use distribution::as_distribution_config;
pub use meter::{as_meter_name, as_meter_type};
pub use primary::{as_bool, as_f64, as_list};
pub use sla::{as_sla_boundary, as_sla_boundary_list};
