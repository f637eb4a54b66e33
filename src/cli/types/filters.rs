//! Filter types for timeline commands.

use crate::error::{AnalystError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Last minute offered by the default timeline window.
pub const FULL_TIME_MINUTE: u32 = 90;

/// Inclusive window of match minutes, written `FROM-TO` on the command line.
///
/// Events recorded in stoppage time carry minutes above 90, so the default
/// `0-90` window leaves them out, the same as the original slider did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinuteRange {
    pub from: u32,
    pub to: u32,
}

impl MinuteRange {
    pub fn new(from: u32, to: u32) -> Result<Self> {
        if from > to {
            return Err(AnalystError::InvalidMinuteRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, minute: u32) -> bool {
        (self.from..=self.to).contains(&minute)
    }
}

impl Default for MinuteRange {
    fn default() -> Self {
        Self {
            from: 0,
            to: FULL_TIME_MINUTE,
        }
    }
}

impl fmt::Display for MinuteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for MinuteRange {
    type Err = AnalystError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('-') {
            Some((from, to)) => Self::new(from.trim().parse()?, to.trim().parse()?),
            // A single minute selects just that minute
            None => {
                let minute = s.trim().parse()?;
                Self::new(minute, minute)
            }
        }
    }
}
