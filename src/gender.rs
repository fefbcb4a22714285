// src/gender.rs
//
// Name → gender guess. The pipeline only sees `GenderClassifier`; the
// bundled implementation is a frequency table of first names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::csv::parse_rows;
use crate::error::{Result, ScrapeError};

static EMBEDDED_NAMES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/names.csv"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenderLabel {
    Male,
    Female,
    Unknown,
}

impl GenderLabel {
    /// Table label before relabelling. Unknown names carry an empty label.
    pub fn label(&self) -> &'static str {
        match self {
            GenderLabel::Male => "Male",
            GenderLabel::Female => "Female",
            GenderLabel::Unknown => "",
        }
    }
}

pub trait GenderClassifier {
    fn classify(&self, first_name: &str) -> GenderLabel;
}

/// First-name frequencies, keyed case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct NameDataset {
    counts: HashMap<String, (u64, u64)>,
}

impl NameDataset {
    /// The small table that ships with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(EMBEDDED_NAMES)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Rows of `name,male,female`; an optional header row starting with `name` is skipped.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut rows = parse_rows(text, ',');
        if rows.first().is_some_and(|r| r.first().is_some_and(|c| c.eq_ignore_ascii_case("name"))) {
            rows.remove(0);
        }

        let mut counts = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let [name, male, female] = row.as_slice() else {
                return Err(ScrapeError::Dataset(format!("row {}: expected 3 fields, got {}", i + 1, row.len())));
            };
            let male = parse_count(male, i)?;
            let female = parse_count(female, i)?;
            counts.insert(name.trim().to_lowercase(), (male, female));
        }
        logd!("Name dataset: {} entries", counts.len());
        Ok(Self { counts })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn parse_count(cell: &str, row: usize) -> Result<u64> {
    cell.trim()
        .parse()
        .map_err(|_| ScrapeError::Dataset(format!("row {}: bad count {:?}", row + 1, cell)))
}

impl GenderClassifier for NameDataset {
    /// Majority wins; ties and unseen names are Unknown.
    fn classify(&self, first_name: &str) -> GenderLabel {
        let key = first_name.trim().to_lowercase();
        match self.counts.get(&key) {
            Some(&(m, f)) if m > f => GenderLabel::Male,
            Some(&(m, f)) if f > m => GenderLabel::Female,
            _ => GenderLabel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_loads() {
        let nd = NameDataset::embedded().unwrap();
        assert!(!nd.is_empty());
        assert_eq!(nd.classify("John"), GenderLabel::Male);
        assert_eq!(nd.classify("MARIA"), GenderLabel::Female);
        assert_eq!(nd.classify("Alex"), GenderLabel::Unknown);
        // Joined display names never match a first name
        assert_eq!(nd.classify("JohnDoe"), GenderLabel::Unknown);
        assert_eq!(nd.classify(""), GenderLabel::Unknown);
    }

    #[test]
    fn header_is_optional() {
        let nd = NameDataset::from_csv_str("kim,1,9\nlee,9,1\n").unwrap();
        assert_eq!(nd.len(), 2);
        assert_eq!(nd.classify("kim"), GenderLabel::Female);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(matches!(NameDataset::from_csv_str("kim,1\n"), Err(ScrapeError::Dataset(_))));
        assert!(matches!(NameDataset::from_csv_str("kim,x,1\n"), Err(ScrapeError::Dataset(_))));
    }

    #[test]
    fn labels() {
        assert_eq!(GenderLabel::Male.label(), "Male");
        assert_eq!(GenderLabel::Unknown.label(), "");
    }
}
