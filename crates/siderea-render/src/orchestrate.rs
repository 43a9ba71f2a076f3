//! Render orchestration.
//!
//! The external library writes its artifact to disk under a name it chooses,
//! so every render runs against a fresh scoped temporary directory and the
//! newest `*.svg` file in it is taken as the result. The directory is
//! removed on every exit path (success, renderer failure, missing artifact)
//! by `TempDir`'s drop.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use siderea_core::{ChartMode, Subject};

use crate::error::{Error, Result};
use crate::renderer::{WheelJob, WheelRenderer};

/// Invokes the wheel-only rendering call and returns the raw artifact text.
pub fn render_wheel_chart(
    renderer: &dyn WheelRenderer,
    first: &Subject,
    second: Option<&Subject>,
    mode: ChartMode,
    active_points: &[&'static str],
    theme: &str,
) -> Result<String> {
    let out_dir = tempfile::tempdir()?;

    let job = WheelJob {
        first_subject: first,
        second_subject: second,
        chart_type: mode.renderer_label(),
        active_points,
        theme,
        wheel_only: true,
        remove_css_variables: true,
        output_directory: out_dir.path(),
    };
    renderer.render_wheel(&job)?;

    let artifact = newest_svg(out_dir.path())?.ok_or(Error::NoArtifact)?;
    let content = fs::read_to_string(&artifact)?;
    if !content.contains("<svg") {
        return Err(Error::InvalidArtifact);
    }
    Ok(content.trim().to_string())
}

/// Finds the most recently created `*.svg` file in `dir`. No stable filename
/// is guaranteed by the library, so creation time is the tie-breaker
/// (modification time where the platform has no creation time).
fn newest_svg(dir: &Path) -> Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }
        let meta = entry.metadata()?;
        let stamp = meta
            .created()
            .or_else(|_| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let replace = match &newest {
            Some((best, _)) => stamp >= *best,
            None => true,
        };
        if replace {
            newest = Some((stamp, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}
