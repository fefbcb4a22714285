// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub filter: FilterCriteria,
    pub export: ExportOptions,
    pub locale: Locale,
}

/// How the harvest loop lets the page settle after each scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Sleep for a fixed duration.
    Fixed(Duration),
    /// Poll the document height until it changes, at most `max_wait`.
    UntilGrowth { poll: Duration, max_wait: Duration },
}

impl Default for WaitPolicy {
    fn default() -> Self {
        WaitPolicy::Fixed(SCROLL_PAUSE)
    }
}

impl WaitPolicy {
    pub fn until_growth() -> Self {
        WaitPolicy::UntilGrowth { poll: GROWTH_POLL, max_wait: GROWTH_MAX_WAIT }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub url: String,
    pub profile_base: String,
    pub wait: WaitPolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_LISTING_URL),
            profile_base: s!(PROFILE_BASE_URL),
            wait: WaitPolicy::default(),
        }
    }
}

/// User-supplied bounds. All ranges are inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    pub min_visits: f64,
    pub max_visits: f64,
    pub min_votes: f64,
    pub max_votes: f64,
    /// Harvest stops once this many author elements are on the page.
    pub limit_users: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_visits: DEFAULT_MIN_VISITS,
            max_visits: DEFAULT_MAX_VISITS,
            min_votes: DEFAULT_MIN_VOTES,
            max_votes: DEFAULT_MAX_VOTES,
            limit_users: DEFAULT_LIMIT_USERS,
        }
    }
}

impl FilterCriteria {
    pub fn accepts(&self, visits: f64, votes: f64) -> bool {
        visits >= self.min_visits
            && visits <= self.max_visits
            && votes >= self.min_votes
            && votes <= self.max_votes
    }
}

/// Column naming for the result table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn headers(&self) -> [&'static str; 8] {
        match self {
            Locale::En => [
                "Alias", "Name", "Gender", "Visits", "Votes", "Works", "Followers", "Links",
            ],
            Locale::Es => [
                "Alias", "Nombre", "Genero", "Visitas", "Votos", "Trabajos", "Seguidores", "Enlaces",
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Html,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Html => "html",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Html => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, or the user's own file name if they typed one with an extension.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match &self.out_path.file_name {
            Some(name) => path.push(name),
            None => {
                let stem = self.out_path.file_stem.to_string_lossy();
                path.push(join!(stem, ".", self.format.ext()));
            }
        }
        path
    }

    /// Parse free text into dir + stem. A typed extension is kept as-is.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.file_name = match p.extension() {
            Some(_) => p.file_name().map(|n| n.to_os_string()),
            None => None,
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    /// Set when the user typed an explicit extension.
    file_name: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            file_name: None,
        }
    }
}
