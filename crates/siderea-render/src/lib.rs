#![forbid(unsafe_code)]

//! Render orchestration and diagram post-processing.
//!
//! The external astrological library lives behind a process boundary (see
//! [`renderer::WheelRenderer`]). This crate drives it with a scoped temporary
//! output location, locates the artifact it writes, and shapes that artifact
//! for safe embedding in a chat client: namespace/viewBox fix-ups always, and
//! best-effort house-markup removal for transit-bearing modes.
//!
//! Every failure path ends in a well-formed diagram: [`fallback::fallback_svg`]
//! never fails.

pub mod error;
pub mod fallback;
pub mod orchestrate;
pub mod renderer;
pub mod sanitize;

pub use error::{Error, Result};
pub use fallback::fallback_svg;
pub use orchestrate::render_wheel_chart;
pub use renderer::{CommandRenderer, WheelJob, WheelRenderer};
pub use sanitize::{HouseFilter, sanitize_artifact};
