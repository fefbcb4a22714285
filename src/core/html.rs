// src/core/html.rs
//
// Thin helpers over `scraper` so the page specs read as selectors + fields.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

/// All descendant text of an element, concatenated as-is.
pub fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of every element matching `css`, in document order.
pub fn select_texts(doc: &Html, css: &str) -> Result<Vec<String>> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).map(|el| text_of(&el)).collect())
}

pub fn count_matches(doc: &Html, css: &str) -> Result<usize> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).count())
}
