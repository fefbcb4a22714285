// src/scrape/harvest.rs
//
// Scroll-and-harvest: keep scrolling a lazily loading listing until enough
// author links are on the page or the page stops growing, then read it once.

use std::thread;
use std::time::Instant;

use crate::{
    browser::{Browser, Launcher, Session},
    config::options::WaitPolicy,
    error::Result,
    progress::Progress,
    specs::listing::{ListingFields, count_authors, parse_listing},
};

/// Loop state; lives for one harvest only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub last_height: i64,
    pub harvested_authors: usize,
}

/// Harvest the listing at `url`.
///
/// If the browser cannot be started or cannot open the page, this logs the
/// failure and returns empty fields instead of an error. Any failure after
/// that propagates. The session is closed on every path.
pub fn harvest(
    launcher: &dyn Launcher,
    url: &str,
    limit_users: usize,
    wait: WaitPolicy,
    progress: &mut dyn Progress,
) -> Result<ListingFields> {
    progress.log("Starting browser…");

    let mut session = match open_session(launcher, url) {
        Ok(s) => s,
        Err(e) => {
            loge!("Harvest: browser could not be loaded: {e}");
            progress.log("Browser could not be loaded");
            return Ok(ListingFields::default());
        }
    };

    let mut state = ScrollState { last_height: session.height()?, harvested_authors: 0 };
    let mut scrolls = 0usize;

    loop {
        session.scroll_to_bottom()?;
        settle(&mut *session, state.last_height, wait)?;
        scrolls += 1;

        state.harvested_authors = count_authors(&session.page_source()?)?;
        logd!("Harvest: scroll {} authors={} height={}", scrolls, state.harvested_authors, state.last_height);
        progress.log(&format!("Scrolling… {} authors loaded", state.harvested_authors));

        if state.harvested_authors >= limit_users {
            break;
        }

        let new_height = session.height()?;
        if new_height == state.last_height {
            break;
        }
        state.last_height = new_height;
    }

    let fields = parse_listing(&session.page_source()?)?;
    logf!(
        "Harvest: done after {} scrolls (authors={}, visits={}, votes={})",
        scrolls,
        fields.authors.len(),
        fields.visit_texts.len(),
        fields.vote_texts.len()
    );
    Ok(fields)
}

fn open_session(launcher: &dyn Launcher, url: &str) -> Result<Session> {
    let mut session = Session::start(launcher)?;
    session.open(url)?;
    Ok(session)
}

/// Let dynamic content load after a scroll.
///
/// `Fixed` sleeps. `UntilGrowth` polls the height until it differs from
/// `last_height` or `max_wait` runs out; running out is not an error.
pub fn settle(browser: &mut dyn Browser, last_height: i64, wait: WaitPolicy) -> Result<()> {
    match wait {
        WaitPolicy::Fixed(pause) => {
            if !pause.is_zero() {
                thread::sleep(pause);
            }
            Ok(())
        }
        WaitPolicy::UntilGrowth { poll, max_wait } => {
            // None: the budget is past what Instant can represent, so no deadline.
            let deadline = Instant::now().checked_add(max_wait);
            loop {
                if browser.height()? != last_height {
                    return Ok(());
                }
                let now = Instant::now();
                let nap = match deadline {
                    Some(d) if now >= d => {
                        logd!("Harvest: no growth within {:?}", max_wait);
                        return Ok(());
                    }
                    Some(d) => poll.min(d - now),
                    None => poll,
                };
                thread::sleep(nap);
            }
        }
    }
}
