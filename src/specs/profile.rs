// src/specs/profile.rs

use scraper::Html;

use crate::config::consts::{FOLLOWERS_SELECTOR, WORKS_BLOCK_SELECTOR, WORKS_COUNT_SELECTOR};
use crate::core::html::{select_texts, selector, text_of};
use crate::core::number::normalize_number;
use crate::error::{Result, ScrapeError};

/// What a profile page adds to a table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRecord {
    /// One entry per follower counter on the page (usually one).
    pub followers: Vec<i64>,
    pub works: i64,
    pub profile_url: String,
}

/// Parse a profile page. `url` is only carried into the record and errors.
///
/// The works block and its count are required; their absence is an error.
pub fn parse_profile(page_source: &str, url: &str) -> Result<ProfileRecord> {
    let doc = Html::parse_document(page_source);

    let followers = select_texts(&doc, FOLLOWERS_SELECTOR)?
        .iter()
        .map(|t| normalize_number(t).map(|v| v as i64))
        .collect::<Result<Vec<_>>>()?;

    let block_sel = selector(WORKS_BLOCK_SELECTOR)?;
    let block = doc
        .select(&block_sel)
        .next()
        .ok_or_else(|| ScrapeError::missing("works block", url))?;

    let count_sel = selector(WORKS_COUNT_SELECTOR)?;
    let count = block
        .select(&count_sel)
        .next()
        .ok_or_else(|| ScrapeError::missing("works count", url))?;

    let raw = text_of(&count);
    let works = raw.trim().parse::<i64>().map_err(|_| ScrapeError::parse(raw.as_str()))?;

    Ok(ProfileRecord { followers, works, profile_url: s!(url) })
}
