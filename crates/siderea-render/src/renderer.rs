//! The external renderer seam.
//!
//! The astrological computation/rendering library is a black box reached
//! through a subprocess: it accepts a serialized job on stdin and writes one
//! SVG artifact into the job's output directory. [`WheelRenderer`] is the
//! trait boundary; [`CommandRenderer`] is the production implementation, and
//! tests substitute stubs that write canned artifacts.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use siderea_core::Subject;

use crate::error::{Error, Result};

/// How many stderr characters a renderer failure may carry into the error
/// message. Full output still goes to the logs.
const STDERR_EXCERPT_CHARS: usize = 200;

/// One wheel-only rendering call, serialized as-is to the bridge process.
#[derive(Debug, Serialize)]
pub struct WheelJob<'a> {
    pub first_subject: &'a Subject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_subject: Option<&'a Subject>,
    /// `"Synastry"` or `"Transit"`; single-subject charts carry no label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<&'static str>,
    pub active_points: &'a [&'static str],
    pub theme: &'a str,
    pub wheel_only: bool,
    /// Ask the library to inline CSS variables; without this some consumers
    /// render the chart all black.
    pub remove_css_variables: bool,
    pub output_directory: &'a Path,
}

/// Boundary to the external wheel renderer. Implementations must write their
/// artifact(s) into `job.output_directory` and keep their own diagnostic
/// chatter off the caller's stdout/stderr.
pub trait WheelRenderer {
    fn render_wheel(&self, job: &WheelJob<'_>) -> Result<()>;
}

/// Runs a configured bridge command, feeding it the JSON-encoded job on
/// stdin and capturing everything it prints.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = args.into_iter().collect();
        self
    }
}

impl WheelRenderer for CommandRenderer {
    fn render_wheel(&self, job: &WheelJob<'_>) -> Result<()> {
        let payload = serde_json::to_vec(job)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&payload)?;
        }
        let output = child.wait_with_output()?;

        // The library chats freely on both streams; none of it may leak into
        // the service's own output, so it is captured and logged instead.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            tracing::debug!(renderer_stdout = %stdout.trim());
        }
        if !stderr.trim().is_empty() {
            tracing::debug!(renderer_stderr = %stderr.trim());
        }

        if !output.status.success() {
            return Err(Error::RendererFailed {
                status: output.status.to_string(),
                stderr: excerpt(stderr.trim(), STDERR_EXCERPT_CHARS),
            });
        }
        Ok(())
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
