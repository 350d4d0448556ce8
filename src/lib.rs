//! Line-by-line comparison of two texts.
//!
//! [`engine::compare`] is the entry point; the other modules render its
//! records as text or load the inputs and settings around it.

pub mod config;
pub mod diff_line;
pub mod engine;
pub mod error;
pub mod export;
pub mod input;
pub mod language;
pub mod report;


pub use diff_line::{LineKind, LineRecord, MODIFIED_SEPARATOR};
pub use engine::{DiffStats, Strategy, compare};
