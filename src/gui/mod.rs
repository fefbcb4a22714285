// src/gui/mod.rs
pub mod app;
pub mod progress;
mod actions;
mod components;

pub use app::run;
