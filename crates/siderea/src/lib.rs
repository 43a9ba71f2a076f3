#![forbid(unsafe_code)]

//! `siderea` normalizes heterogeneous birth/event records, drives an external
//! astrological wheel renderer, and post-processes the resulting SVG for safe
//! embedding in a chat client.
//!
//! The pipeline is one-way: raw request → canonical record(s) → subject
//! parameter set(s) → raw artifact → sanitized artifact, with a fixed
//! placeholder diagram as the escape hatch on any failure. No astronomical
//! computation happens here; house cusps, planetary longitudes, and aspect
//! geometry are entirely delegated to the renderer behind
//! [`render::WheelRenderer`].
//!
//! ```no_run
//! use siderea::ChartService;
//! use siderea::render::CommandRenderer;
//!
//! let service = ChartService::new(CommandRenderer::new("kerykeion-bridge"));
//! let request = serde_json::json!({
//!     "source_type": "idol",
//!     "birth_date": "1990-01-01",
//!     "birth_country": "United States",
//! });
//! let svg = service.generate(&request); // always well-formed SVG
//! # let _ = svg;
//! ```

pub use siderea_core::*;

pub mod render {
    pub use siderea_render::{
        CommandRenderer, Error, HouseFilter, Result, WheelJob, WheelRenderer, fallback_svg,
        render_wheel_chart, sanitize_artifact,
    };
}

mod request;
mod service;

pub use request::ChartRequest;
pub use service::{ChartService, PipelineError};
