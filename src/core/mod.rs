// src/core/mod.rs

pub mod html;
pub mod names;
pub mod net;
pub mod number;
pub mod sanitize;

pub use names::{clean_name, clean_names};
pub use number::normalize_number;
