/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

mod name;
pub use name::{MeterName, MeterNamePrefixes};

mod meter_type;
pub use meter_type::MeterType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty meter name")]
    Empty,
    #[error("empty segment in meter name")]
    EmptySegment,
    #[error("invalid graphic char: {0}")]
    InvalidGraphic(char),
    #[error("not alpha numeric char")]
    NotAlphaNumeric,
    #[error("unknown meter type {0}")]
    UnknownMeterType(String),
}

fn chars_allowed_in_segment(s: &str) -> Result<(), ParseError> {
    for c in s.chars() {
        if c.is_ascii() {
            match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '/' => {}
                _ => {
                    return if c.is_ascii_graphic() {
                        Err(ParseError::InvalidGraphic(c))
                    } else {
                        Err(ParseError::NotAlphaNumeric)
                    };
                }
            }
        } else if !c.is_alphanumeric() {
            return Err(ParseError::NotAlphaNumeric);
        }
    }
    Ok(())
}
