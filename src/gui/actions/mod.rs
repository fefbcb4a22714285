// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,scrape}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use copy::copy;
pub use export::export;
pub use scrape::scrape;

use crate::{data::ResultTable, gui::app::App};

/// The table to copy/export, if there is anything in it.
#[inline]
pub(super) fn current_table(app: &App) -> Option<&ResultTable> {
    app.table.as_ref().filter(|t| !t.is_empty())
}
