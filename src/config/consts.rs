// src/config/consts.rs
use std::time::Duration;

// Site
pub const DEFAULT_LISTING_URL: &str =
    "https://www.wattpad.com/stories/juvenil%2cnovelajuvenil/new?prev=novelajuvenil";
pub const PROFILE_BASE_URL: &str = "https://www.wattpad.com/user/";
pub const USER_PATH_PREFIX: &str = "/user/";
pub const USER_AGENT: &str = "Mozilla/5.0";

// Listing page selectors
pub const AUTHOR_SELECTOR: &str = ".username.meta.on-navigate";
pub const VISITS_SELECTOR: &str = ".read-count";
pub const VOTES_SELECTOR: &str = ".vote-count";
/// Author link text reads "by <alias>".
pub const ALIAS_PREFIX: &str = "by ";
/// Counter texts carry this tail from the page's lazy icon markup.
pub const COUNTER_MARKER: &str = "auto\"/>";

// Profile page selectors
pub const FOLLOWERS_SELECTOR: &str = ".followers-count";
pub const WORKS_BLOCK_SELECTOR: &str = r#"[data-id="profile-works"]"#;
pub const WORKS_COUNT_SELECTOR: &str = "p";

// Scroll loop
pub const SCROLL_PAUSE: Duration = Duration::from_secs(2);
pub const GROWTH_POLL: Duration = Duration::from_millis(250);
pub const GROWTH_MAX_WAIT: Duration = Duration::from_secs(10);
/// Upper bound for any user-supplied wait, in seconds.
pub const MAX_WAIT_SECS: f64 = 3600.0;
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// Filter defaults
pub const DEFAULT_MIN_VISITS: f64 = 10.0;
pub const DEFAULT_MAX_VISITS: f64 = 100_000.0;
pub const DEFAULT_MIN_VOTES: f64 = 10.0;
pub const DEFAULT_MAX_VOTES: f64 = 500.0;
pub const DEFAULT_LIMIT_USERS: usize = 20;

// Logging
pub const LOG_FILE: &str = "logs/app.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "authors";
