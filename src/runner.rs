// src/runner.rs
//
// One scrape invocation, end to end:
// harvest → normalize → assemble/pad → filter → sort → relabel → enrich.

use std::path::Path;

use crate::{
    browser::{ChromeLauncher, Launcher},
    config::options::AppOptions,
    core::net::{HttpFetcher, PageFetcher},
    data::{RawListing, ResultTable},
    error::Result,
    gender::{GenderClassifier, NameDataset},
    progress::Progress,
    scrape,
};

/// Everything one run needs from the outside world.
/// Built per invocation and dropped with it; nothing is shared across runs.
pub struct ScrapeContext {
    pub launcher: Box<dyn Launcher>,
    pub fetcher: Box<dyn PageFetcher>,
    pub classifier: Box<dyn GenderClassifier>,
}

impl ScrapeContext {
    /// Headless Chrome, a real HTTP client and the bundled name table.
    pub fn live() -> Result<Self> {
        Self::live_with_names(None)
    }

    /// Like `live`, with an optional `name,male,female` CSV instead of the bundled table.
    pub fn live_with_names(names: Option<&Path>) -> Result<Self> {
        let dataset = match names {
            Some(path) => NameDataset::from_path(path)?,
            None => NameDataset::embedded()?,
        };
        Ok(Self {
            launcher: Box::new(ChromeLauncher),
            fetcher: Box::new(HttpFetcher::new()?),
            classifier: Box::new(dataset),
        })
    }
}

/// Run the whole pipeline.
///
/// A browser that cannot start yields an empty table. Parse errors and
/// profile failures abort the run.
pub fn run(ctx: &ScrapeContext, opts: &AppOptions, progress: &mut dyn Progress) -> Result<ResultTable> {
    logf!("Run: begin url={} limit_users={}", opts.scrape.url, opts.filter.limit_users);

    let fields = scrape::harvest(
        ctx.launcher.as_ref(),
        &opts.scrape.url,
        opts.filter.limit_users,
        opts.scrape.wait,
        progress,
    )?;
    if fields.is_empty() {
        logf!("Run: nothing harvested");
        return Ok(ResultTable::default());
    }

    let raw = RawListing::from_fields(&fields, ctx.classifier.as_ref())?;
    let mut table = ResultTable::assemble(raw);
    let harvested = table.len();

    table.filter(&opts.filter);
    table.sort_by_visits_desc();
    table.relabel_genders();
    logf!("Run: {} of {} rows within filter", table.len(), harvested);

    progress.log(&format!("Fetching {} profiles…", table.len()));
    scrape::enrich(&mut table, ctx.fetcher.as_ref(), &opts.scrape.profile_base, progress)?;

    logf!("Run: done rows={}", table.len());
    Ok(table)
}
