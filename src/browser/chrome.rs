// src/browser/chrome.rs
use std::sync::Arc;

use headless_chrome::{Browser as Chrome, LaunchOptions, Tab};

use super::{Browser, Launcher};
use crate::error::{Result, ScrapeError};

const HEIGHT_JS: &str = "document.body.scrollHeight";
const SCROLL_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Headless Chrome, sandbox off (containers rarely allow it).
#[derive(Clone, Debug, Default)]
pub struct ChromeLauncher;

impl Launcher for ChromeLauncher {
    fn launch(&self) -> Result<Box<dyn Browser>> {
        let opts = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .build()
            .map_err(|e| ScrapeError::BrowserLaunch(e.to_string()))?;
        let chrome = Chrome::new(opts).map_err(|e| ScrapeError::BrowserLaunch(e.to_string()))?;
        let tab = chrome.new_tab().map_err(|e| ScrapeError::BrowserLaunch(e.to_string()))?;
        logf!("Browser: headless chrome started");
        Ok(Box::new(ChromeSession { chrome: Some(chrome), tab: Some(tab) }))
    }
}

struct ChromeSession {
    chrome: Option<Chrome>,
    tab: Option<Arc<Tab>>,
}

fn cmd_err(e: impl ToString) -> ScrapeError {
    ScrapeError::Browser(e.to_string())
}

/// Failing to load the target page counts as not getting a session at all.
fn open_err(e: impl ToString) -> ScrapeError {
    ScrapeError::BrowserLaunch(e.to_string())
}

impl ChromeSession {
    fn tab(&self) -> Result<&Arc<Tab>> {
        self.tab.as_ref().ok_or_else(|| ScrapeError::Browser(s!("session already closed")))
    }
}

impl Browser for ChromeSession {
    fn open(&mut self, url: &str) -> Result<()> {
        let tab = self.tab()?;
        tab.navigate_to(url).map_err(open_err)?;
        tab.wait_until_navigated().map_err(open_err)?;
        Ok(())
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.tab()?.evaluate(SCROLL_JS, false).map_err(cmd_err)?;
        Ok(())
    }

    fn height(&mut self) -> Result<i64> {
        let obj = self.tab()?.evaluate(HEIGHT_JS, false).map_err(cmd_err)?;
        obj.value
            .as_ref()
            .and_then(|v| v.as_f64())
            .map(|h| h as i64)
            .ok_or_else(|| ScrapeError::Browser(s!("scrollHeight did not return a number")))
    }

    fn page_source(&mut self) -> Result<String> {
        self.tab()?.get_content().map_err(cmd_err)
    }

    fn close(&mut self) {
        if let Some(tab) = self.tab.take() {
            let _ = tab.close(false);
        }
        // Dropping the handle kills the chrome process.
        self.chrome.take();
    }
}
