// src/browser/mod.rs
//
// The scroll loop's view of a browser. Keeping it behind a trait lets the
// loop run against a scripted fake in tests.

pub mod chrome;

use std::ops::{Deref, DerefMut};

use crate::error::Result;

pub use chrome::ChromeLauncher;

pub trait Browser {
    fn open(&mut self, url: &str) -> Result<()>;
    fn scroll_to_bottom(&mut self) -> Result<()>;
    /// Current `document.body.scrollHeight`.
    fn height(&mut self) -> Result<i64>;
    fn page_source(&mut self) -> Result<String>;
    /// Release the session. Must be safe to call more than once.
    fn close(&mut self);
}

/// Starts browser sessions. Failure here is `ScrapeError::BrowserLaunch`.
pub trait Launcher {
    fn launch(&self) -> Result<Box<dyn Browser>>;
}

/// Owns one browser for the length of a harvest and closes it on drop,
/// whichever way the harvest exits.
pub struct Session {
    browser: Box<dyn Browser>,
}

impl Session {
    pub fn start(launcher: &dyn Launcher) -> Result<Self> {
        Ok(Self { browser: launcher.launch()? })
    }
}

impl Deref for Session {
    type Target = dyn Browser;
    fn deref(&self) -> &Self::Target {
        self.browser.as_ref()
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.browser.as_mut()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.browser.close();
        logd!("Browser: session closed");
    }
}
