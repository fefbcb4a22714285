// src/data.rs
//
// Table data between harvest and presentation.
//
// - RawListing: parallel per-field lists straight out of one harvest.
// - ResultTable: padded, row-shaped table. Filter/sort/relabel work on it in
//                place and the profile enricher later fills its last columns.

use std::cmp::Ordering;
use std::iter;

use crate::config::options::{FilterCriteria, Locale};
use crate::core::names::{clean_names, first_name};
use crate::core::number::normalize_number;
use crate::core::sanitize::strip_counter_marker;
use crate::error::Result;
use crate::gender::GenderClassifier;
use crate::specs::listing::{ListingFields, extract_aliases, extract_usernames};

/// Field lists of one harvest. Lengths may differ.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawListing {
    pub aliases: Vec<String>,
    pub usernames: Vec<String>,
    pub genders: Vec<String>,
    pub visits: Vec<f64>,
    pub votes: Vec<f64>,
}

impl RawListing {
    /// Normalize raw DOM fields: usernames, aliases, gender guesses, counters.
    /// A malformed counter aborts with `ScrapeError::Parse`.
    pub fn from_fields(fields: &ListingFields, classifier: &dyn GenderClassifier) -> Result<Self> {
        let usernames = extract_usernames(&fields.authors);
        let aliases = extract_aliases(&fields.authors);

        let genders = clean_names(&aliases)
            .iter()
            .map(|n| s!(classifier.classify(first_name(n)).label()))
            .collect();

        let visits = parse_counters(&fields.visit_texts)?;
        let votes = parse_counters(&fields.vote_texts)?;

        Ok(Self { aliases, usernames, genders, visits, votes })
    }

    pub fn lens(&self) -> [usize; 5] {
        [
            self.aliases.len(),
            self.usernames.len(),
            self.genders.len(),
            self.visits.len(),
            self.votes.len(),
        ]
    }

    pub fn max_len(&self) -> usize {
        self.lens().into_iter().max().unwrap_or(0)
    }
}

fn parse_counters(texts: &[String]) -> Result<Vec<f64>> {
    texts.iter().map(|t| normalize_number(strip_counter_marker(t))).collect()
}

/// Force a list to `max_len` entries.
///
/// An empty list becomes all-missing; a shorter one gets missing values at
/// the tail. Values keep their positions, so rows can pair up fields that
/// came from different stories.
pub fn pad<T>(list: Vec<T>, max_len: usize) -> Vec<Option<T>> {
    if list.is_empty() {
        return iter::repeat_with(|| None).take(max_len).collect();
    }
    let missing = max_len.saturating_sub(list.len());
    list.into_iter()
        .map(Some)
        .chain(iter::repeat_with(|| None).take(missing))
        .collect()
}

/// Maps the classifier's labels to the short table form; others pass through.
pub fn relabel_gender(label: &str) -> String {
    match label {
        "Male" => s!("M"),
        "Female" => s!("F"),
        "" => s!("-"),
        other => s!(other),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultRow {
    pub alias: Option<String>,
    pub username: Option<String>,
    pub gender: Option<String>,
    pub visits: Option<f64>,
    pub votes: Option<f64>,
    pub works: Option<i64>,
    pub followers: Vec<i64>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Pad every list to the longest one and zip them into rows.
    pub fn assemble(raw: RawListing) -> Self {
        let n = raw.max_len();
        if raw.lens().iter().any(|&l| l != n) {
            logf!("Table: padding field lists {:?} to {}", raw.lens(), n);
        }

        let aliases = pad(raw.aliases, n);
        let usernames = pad(raw.usernames, n);
        let genders = pad(raw.genders, n);
        let visits = pad(raw.visits, n);
        let votes = pad(raw.votes, n);

        let rows = aliases
            .into_iter()
            .zip(usernames)
            .zip(genders)
            .zip(visits)
            .zip(votes)
            .map(|((((alias, username), gender), visits), votes)| ResultRow {
                alias,
                username,
                gender,
                visits,
                votes,
                ..ResultRow::default()
            })
            .collect();

        Self { rows }
    }

    /// Keep rows whose visits and votes are present and inside the ranges.
    pub fn filter(&mut self, criteria: &FilterCriteria) {
        self.rows.retain(|r| match (r.visits, r.votes) {
            (Some(visits), Some(votes)) => criteria.accepts(visits, votes),
            _ => false,
        });
    }

    /// Most visited first; ties keep their order.
    pub fn sort_by_visits_desc(&mut self) {
        self.rows
            .sort_by(|a, b| b.visits.partial_cmp(&a.visits).unwrap_or(Ordering::Equal));
    }

    pub fn relabel_genders(&mut self) {
        for row in &mut self.rows {
            if let Some(g) = row.gender.as_mut() {
                *g = relabel_gender(g);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self, locale: Locale) -> Vec<String> {
        locale.headers().iter().map(|h| s!(*h)).collect()
    }

    /// Display strings per row, in header order. Missing values are empty.
    pub fn to_cells(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(ResultRow::cells).collect()
    }
}

/// Column index of the links column in `cells()` / `headers()`.
pub const LINKS_COL: usize = 7;

impl ResultRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.alias.clone().unwrap_or_default(),
            self.username.clone().unwrap_or_default(),
            self.gender.clone().unwrap_or_default(),
            fmt_num(self.visits),
            fmt_num(self.votes),
            self.works.map(|w| w.to_string()).unwrap_or_default(),
            self.followers.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", "),
            self.link.clone().unwrap_or_default(),
        ]
    }
}

fn fmt_num(v: Option<f64>) -> String {
    v.map(|x| format!("{x}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::GenderLabel;
    use crate::specs::listing::AuthorLink;

    struct ByInitial;
    impl GenderClassifier for ByInitial {
        fn classify(&self, first_name: &str) -> GenderLabel {
            match first_name.chars().next() {
                Some('J') => GenderLabel::Male,
                Some('A') => GenderLabel::Female,
                _ => GenderLabel::Unknown,
            }
        }
    }

    fn row(visits: f64, votes: f64) -> ResultRow {
        ResultRow { visits: Some(visits), votes: Some(votes), ..ResultRow::default() }
    }

    #[test]
    fn pad_fills_empty_and_short_lists() {
        let lists = [vec![1, 2, 3], vec![], vec![4, 5]];
        let max = lists.iter().map(Vec::len).max().unwrap();
        assert_eq!(max, 3);

        let [a, b, c] = lists;
        assert_eq!(pad(a, max), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(pad(b, max), vec![None, None, None]);
        assert_eq!(pad(c, max), vec![Some(4), Some(5), None]);
    }

    #[test]
    fn filter_keeps_inclusive_range() {
        let mut t = ResultTable { rows: vec![row(5.0, 1.0), row(50.0, 1.0), row(500.0, 1.0)] };
        let f = FilterCriteria {
            min_visits: 10.0,
            max_visits: 100.0,
            min_votes: 0.0,
            max_votes: 10.0,
            limit_users: 1,
        };
        t.filter(&f);
        assert_eq!(t.len(), 1);
        assert_eq!(t.rows[0].visits, Some(50.0));
    }

    #[test]
    fn filter_drops_padded_rows() {
        let mut t = ResultTable {
            rows: vec![row(50.0, 1.0), ResultRow { visits: Some(50.0), ..ResultRow::default() }],
        };
        t.filter(&FilterCriteria { min_votes: 0.0, ..FilterCriteria::default() });
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn sort_descending_by_visits() {
        let mut t = ResultTable { rows: vec![row(20.0, 1.0), row(90.0, 2.0), row(40.0, 3.0)] };
        t.sort_by_visits_desc();
        let v: Vec<_> = t.rows.iter().map(|r| r.visits.unwrap()).collect();
        assert_eq!(v, vec![90.0, 40.0, 20.0]);
    }

    #[test]
    fn relabel_table() {
        assert_eq!(relabel_gender("Male"), "M");
        assert_eq!(relabel_gender("Female"), "F");
        assert_eq!(relabel_gender(""), "-");
        assert_eq!(relabel_gender("Unknown"), "Unknown");

        let mut t = ResultTable {
            rows: vec![
                ResultRow { gender: Some(s!("Female")), ..ResultRow::default() },
                ResultRow { gender: None, ..ResultRow::default() },
            ],
        };
        t.relabel_genders();
        assert_eq!(t.rows[0].gender.as_deref(), Some("F"));
        assert_eq!(t.rows[1].gender, None);
    }

    #[test]
    fn normalize_fields() {
        let fields = ListingFields {
            authors: vec![
                AuthorLink { text: s!("by JohnDoe"), href: Some(s!("/user/jd")) },
                AuthorLink { text: s!("by Ana Lee!"), href: Some(s!("/user/ana")) },
                AuthorLink { text: s!("by Zed"), href: Some(s!("/tags/zed")) },
            ],
            visit_texts: vec![s!("1.2Kauto\"/>"), s!("250"), s!("3")],
            vote_texts: vec![s!("87"), s!("12")],
        };
        let raw = RawListing::from_fields(&fields, &ByInitial).unwrap();
        assert_eq!(raw.aliases, vec!["JohnDoe", "Ana Lee!", "Zed"]);
        assert_eq!(raw.usernames, vec!["jd", "ana"]);
        assert_eq!(raw.genders, vec!["Male", "Female", ""]);
        assert_eq!(raw.visits, vec![1200.0, 250.0, 3.0]);
        assert_eq!(raw.votes, vec![87.0, 12.0]);
        assert_eq!(raw.lens(), [3, 2, 3, 3, 2]);
    }

    #[test]
    fn bad_counter_is_fatal() {
        let fields = ListingFields { visit_texts: vec![s!("many")], ..ListingFields::default() };
        assert!(RawListing::from_fields(&fields, &ByInitial).is_err());
    }

    #[test]
    fn assemble_pads_tail() {
        let raw = RawListing {
            aliases: vec![s!("a"), s!("b")],
            usernames: vec![s!("ua")],
            genders: vec![s!("Male"), s!("")],
            visits: vec![10.0, 20.0],
            votes: vec![],
        };
        let t = ResultTable::assemble(raw);
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows[1].username, None);
        assert_eq!(t.rows[1].visits, Some(20.0));
        assert!(t.rows.iter().all(|r| r.votes.is_none()));
    }

    #[test]
    fn assemble_empty() {
        assert!(ResultTable::assemble(RawListing::default()).is_empty());
    }

    #[test]
    fn cells_format() {
        let r = ResultRow {
            alias: Some(s!("Ana")),
            username: Some(s!("ana")),
            gender: Some(s!("F")),
            visits: Some(1200.0),
            votes: Some(12.5),
            works: Some(3),
            followers: vec![10, 20],
            link: Some(s!("https://www.wattpad.com/user/ana")),
        };
        assert_eq!(
            r.cells(),
            vec!["Ana", "ana", "F", "1200", "12.5", "3", "10, 20", "https://www.wattpad.com/user/ana"]
        );
        assert_eq!(ResultRow::default().cells()[LINKS_COL], "");
    }
}
