// src/core/net.rs
//
// Page fetching. Profile pages are plain server-rendered HTML, so a blocking
// GET with a browser-like user agent is enough.

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into an HTML string.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(ScrapeError::HttpClient)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    /// Non-200 pages still return their body; missing fields surface later.
    fn fetch(&self, url: &str) -> Result<String> {
        let http = |source| ScrapeError::Http { url: s!(url), source };
        let resp = self.client.get(url).send().map_err(http)?;
        logd!("GET {} -> {}", url, resp.status());
        resp.text().map_err(http)
    }
}
