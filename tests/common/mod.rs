// tests/common/mod.rs
//
// Scripted stand-ins for the browser and the profile fetcher.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wattpad_mate::browser::{Browser, Launcher};
use wattpad_mate::core::net::PageFetcher;
use wattpad_mate::error::{Result, ScrapeError};

/// One story card on a fake listing page.
#[derive(Clone, Debug)]
pub struct Card {
    pub alias: &'static str,
    pub username: &'static str,
    pub visits: &'static str,
    pub votes: &'static str,
}

pub fn card(alias: &'static str, username: &'static str, visits: &'static str, votes: &'static str) -> Card {
    Card { alias, username, visits, votes }
}

pub fn listing_html(cards: &[Card]) -> String {
    let mut out = String::from("<html><body>\n");
    for c in cards {
        out.push_str(&format!(
            concat!(
                "<div class=\"story\">",
                "<a class=\"username meta on-navigate\" href=\"/user/{}\">by {}</a>",
                "<span class=\"read-count\">{}</span>",
                "<span class=\"vote-count\">{}</span>",
                "</div>\n"
            ),
            c.username, c.alias, c.visits, c.votes
        ));
    }
    out.push_str("</body></html>\n");
    out
}

/// `n` cards with generated names and mid-range counters.
pub fn cards(n: usize) -> Vec<Card> {
    (0..n).map(|_| card("Anon", "anon", "100", "20")).collect()
}

pub fn profile_html(followers: &str, works: &str) -> String {
    format!(
        concat!(
            "<html><body>",
            "<span class=\"followers-count\">{}</span>",
            "<div data-id=\"profile-works\"><p>{}</p><span>Works</span></div>",
            "</body></html>"
        ),
        followers, works
    )
}

/// Observations shared between a test and the browser it scripted.
#[derive(Clone, Default)]
pub struct Probe {
    pub scrolls: Rc<Cell<usize>>,
    pub closed: Rc<Cell<usize>>,
    pub opened: Rc<RefCell<Vec<String>>>,
}

/// After `k` scrolls the page reports `heights[k]` and shows `pages[k]`
/// (the last entry repeats once the script runs out).
#[derive(Clone, Default)]
pub struct Script {
    pub heights: Vec<i64>,
    pub pages: Vec<String>,
    pub fail_launch: bool,
    pub fail_open: bool,
    /// Fail `page_source` once this many scrolls happened.
    pub fail_source_at: Option<usize>,
}

impl Script {
    pub fn new(heights: &[i64], pages: Vec<String>) -> Self {
        Self { heights: heights.to_vec(), pages, ..Self::default() }
    }
}

pub struct FakeLauncher {
    pub script: Script,
    pub probe: Probe,
}

impl FakeLauncher {
    pub fn new(script: Script) -> Self {
        Self { script, probe: Probe::default() }
    }
}

impl Launcher for FakeLauncher {
    fn launch(&self) -> Result<Box<dyn Browser>> {
        if self.script.fail_launch {
            return Err(ScrapeError::BrowserLaunch("no chrome here".into()));
        }
        Ok(Box::new(FakeBrowser { script: self.script.clone(), probe: self.probe.clone() }))
    }
}

pub struct FakeBrowser {
    script: Script,
    probe: Probe,
}

fn at<T: Clone>(items: &[T], k: usize) -> Option<T> {
    items.get(k).or_else(|| items.last()).cloned()
}

impl Browser for FakeBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        if self.script.fail_open {
            return Err(ScrapeError::BrowserLaunch(format!("cannot open {url}")));
        }
        self.probe.opened.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.probe.scrolls.set(self.probe.scrolls.get() + 1);
        Ok(())
    }

    fn height(&mut self) -> Result<i64> {
        Ok(at(&self.script.heights, self.probe.scrolls.get()).unwrap_or(0))
    }

    fn page_source(&mut self) -> Result<String> {
        let k = self.probe.scrolls.get();
        if self.script.fail_source_at.is_some_and(|n| k >= n) {
            return Err(ScrapeError::Browser("tab crashed".into()));
        }
        Ok(at(&self.script.pages, k).unwrap_or_default())
    }

    fn close(&mut self) {
        self.probe.closed.set(self.probe.closed.get() + 1);
    }
}

/// Serves canned pages by URL; anything else gets an empty document.
#[derive(Default)]
pub struct MapFetcher {
    pub pages: HashMap<String, String>,
    pub seen: RefCell<Vec<String>>,
}

impl MapFetcher {
    pub fn with(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }
}

impl PageFetcher for MapFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.seen.borrow_mut().push(url.to_string());
        Ok(self.pages.get(url).cloned().unwrap_or_else(|| "<html></html>".to_string()))
    }
}
