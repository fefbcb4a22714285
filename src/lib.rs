// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;
pub mod config;
pub mod core;
pub mod csv;
pub mod gender;
pub mod specs;
pub mod data;

pub mod browser;
pub mod progress;
pub mod scrape;
pub mod runner;

pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
