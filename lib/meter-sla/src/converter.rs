/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use crate::DurationFormatError;

/// Converts free-form duration text, such as `10s` or `1h2m`, into a [`Duration`].
pub trait DurationConverter {
    fn convert(&self, text: &str) -> Result<Duration, DurationFormatError>;
}

/// The default converter, backed by `humanize_rs`.
///
/// Text without a unit is rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanizeDurationConverter;

impl DurationConverter for HumanizeDurationConverter {
    fn convert(&self, text: &str) -> Result<Duration, DurationFormatError> {
        humanize_rs::duration::parse(text).map_err(|e| DurationFormatError::new(text, e))
    }
}
