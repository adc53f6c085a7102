//! Calendar date of a post.
//!
//! Dates travel through the metadata record as `YYYY-MM-DD` strings and
//! carry no time-of-day or timezone.

#![forbid(unsafe_code)]

use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::DnblogError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The day a post was written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate(NaiveDate);

impl PostDate {
    /// Wraps an existing calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The current local date.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Formats the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_iso_date_string(&self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }
}

impl FromStr for PostDate {
    type Err = DnblogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|e| DnblogError::InvalidDate {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_date_string())
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_date_string())
    }
}
