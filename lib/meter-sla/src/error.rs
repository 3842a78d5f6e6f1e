/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{text}' to duration: {reason}")]
pub struct DurationFormatError {
    text: String,
    reason: String,
}

impl DurationFormatError {
    pub fn new<R: ToString>(text: &str, reason: R) -> Self {
        DurationFormatError {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlaBoundaryError {
    #[error("invalid numeric boundary: {0}")]
    NumericFormat(#[from] ParseIntError),
    #[error("invalid duration boundary: {0}")]
    DurationFormat(#[from] DurationFormatError),
}

#[derive(Debug, Error, PartialEq)]
pub enum DistributionConfigError {
    #[error("percentile {0} is out of range [0, 1]")]
    PercentileOutOfRange(f64),
}
