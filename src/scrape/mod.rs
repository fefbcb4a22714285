// src/scrape/mod.rs
mod enrich;
mod harvest;

pub use enrich::enrich;
pub use harvest::{ScrollState, harvest, settle};
