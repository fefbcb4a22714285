// src/scrape/enrich.rs

use crate::{
    core::net::PageFetcher,
    data::ResultTable,
    error::{Result, ScrapeError},
    progress::Progress,
    specs::profile::parse_profile,
};

/// Fetch each row's profile, one request at a time, and fill
/// `followers`, `works` and `link` in table order.
///
/// The first row that cannot be enriched aborts the whole table.
pub fn enrich(
    table: &mut ResultTable,
    fetcher: &dyn PageFetcher,
    profile_base: &str,
    progress: &mut dyn Progress,
) -> Result<()> {
    logf!("Enrich: {} profiles", table.len());
    progress.begin(table.len());

    for (i, row) in table.rows.iter_mut().enumerate() {
        let username = row
            .username
            .clone()
            .ok_or_else(|| ScrapeError::missing("username", format!("table row {i}")))?;

        let url = join!(profile_base, &username);
        let html = fetcher.fetch(&url)?;
        let profile = parse_profile(&html, &url)?;

        row.followers = profile.followers;
        row.works = Some(profile.works);
        row.link = Some(profile.profile_url);
        progress.item_done(&username);
    }

    progress.finish();
    Ok(())
}
