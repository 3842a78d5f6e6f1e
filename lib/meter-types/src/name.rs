/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use super::{ParseError, chars_allowed_in_segment};

/// A dotted meter name, such as `http.server.requests`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeterName(String);

impl MeterName {
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Iterate over the name itself and then every parent name, longest first.
    ///
    /// `a.b.c` yields `a.b.c`, `a.b` and `a`.
    pub fn prefixes(&self) -> MeterNamePrefixes<'_> {
        MeterNamePrefixes {
            left: Some(self.0.as_str()),
        }
    }
}

impl FromStr for MeterName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(ParseError::EmptySegment);
            }
            chars_allowed_in_segment(segment)?;
        }
        Ok(MeterName(s.to_string()))
    }
}

impl fmt::Display for MeterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct MeterNamePrefixes<'a> {
    left: Option<&'a str>,
}

impl<'a> Iterator for MeterNamePrefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.left.take()?;
        self.left = cur.rfind('.').map(|p| &cur[..p]);
        Some(cur)
    }
}
