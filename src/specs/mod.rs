// src/specs/mod.rs
//! # Page specs
//!
//! One module per page the scraper reads. A spec knows *where the data lives
//! in the HTML* and turns a page source into a small owned struct. It does not
//! fetch, sleep, log progress or hold browser state; those belong to
//! `scrape::*`.
//!
//! ## Current specs
//! - `listing` – story listing: author links ("by <alias>", `/user/<name>`),
//!   read counts and vote counts, each as a separate document-order list.
//! - `profile` – user profile: follower counters and the works count.
//!
//! ## Conventions
//! - Selectors live in `config::consts`; specs never hardcode them inline.
//! - Lists are returned exactly as found. Alignment between them is the
//!   table assembler's job.
//! - Specs are testable offline against inline HTML fixtures.
pub mod listing;
pub mod profile;
