/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod digit;

mod error;
pub use error::{DistributionConfigError, DurationFormatError, SlaBoundaryError};

mod converter;
pub use converter::{DurationConverter, HumanizeDurationConverter};

mod boundary;
pub use boundary::SlaBoundary;

mod distribution;
pub use distribution::{DistributionConfig, LOOKUP_FALLBACK_KEY};
