#![forbid(unsafe_code)]

//! Birth-record normalization and chart subject construction.
//!
//! This crate owns the input side of the siderea pipeline: it turns one of
//! several heterogeneous request payload shapes into a canonical
//! [`BirthRecord`], decides the [`ChartMode`] for the request, and builds the
//! subject parameter set(s) handed to the external wheel renderer.
//!
//! Design goals:
//! - total, deterministic normalization (unknown preference values fall back
//!   to documented defaults instead of failing)
//! - `ChartMode` is resolved exactly once and threaded immutably; no later
//!   stage re-derives it
//! - no astronomical computation of any kind happens here

pub mod error;
pub mod extract;
pub mod geo;
pub mod mode;
pub mod points;
pub mod prefs;
pub mod record;
pub mod subject;

pub use error::{Error, Result};
pub use extract::{SourceType, extract_record};
pub use mode::{ChartMode, select_mode};
pub use points::active_points;
pub use prefs::{HouseSystem, RenderPreferences, Rulership, Zodiac};
pub use record::{BirthRecord, BirthTime};
pub use subject::{Subject, build_subjects};
