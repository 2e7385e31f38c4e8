//! Post metadata

use chrono::NaiveDate;
use serde::Serialize;

use crate::helpers::{full_date, parse_iso_date};
use crate::SiteError;

/// Metadata of one blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    /// Routing and lookup key
    pub slug: String,

    pub title: String,

    /// Publication date (calendar date, no time zone)
    pub date: NaiveDate,

    pub description: String,

    /// Display order is significant, duplicates are kept
    pub tags: Vec<String>,
}

impl PostMeta {
    /// Date in long form ("February 18, 2026")
    pub fn display_date(&self) -> String {
        full_date(&self.date)
    }
}

/// A post as declared in source, before validation
#[derive(Debug, Clone, Copy)]
pub struct PostEntry {
    pub slug: &'static str,
    pub title: &'static str,
    /// `YYYY-MM-DD`
    pub date: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

impl TryFrom<&PostEntry> for PostMeta {
    type Error = SiteError;

    fn try_from(entry: &PostEntry) -> Result<Self, Self::Error> {
        let date = parse_iso_date(entry.date).ok_or_else(|| SiteError::InvalidDate {
            slug: entry.slug.to_string(),
            date: entry.date.to_string(),
        })?;

        Ok(Self {
            slug: entry.slug.to_string(),
            title: entry.title.to_string(),
            date,
            description: entry.description.to_string(),
            tags: entry.tags.iter().map(|t| t.to_string()).collect(),
        })
    }
}
