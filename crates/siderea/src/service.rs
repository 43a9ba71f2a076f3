//! Pipeline assembly.

use serde_json::Value;

use siderea_core::{
    RenderPreferences, SourceType, active_points, build_subjects, extract_record,
    select_mode,
};
use siderea_render::{WheelRenderer, fallback_svg, render_wheel_chart, sanitize_artifact};

use crate::request::ChartRequest;

/// Combined error type for one pipeline execution. `InvalidInput` and
/// `RenderFailure` conditions land here; recovered fallbacks never do.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Request payload is not a JSON object")]
    InvalidRequest,

    #[error(transparent)]
    Input(#[from] siderea_core::Error),

    #[error(transparent)]
    Render(#[from] siderea_render::Error),
}

/// Bundles the renderer seam with the full request → SVG pipeline.
///
/// One call handles one request; there is no shared mutable state, so a
/// single `ChartService` can serve concurrent requests (each render gets its
/// own scoped output directory).
pub struct ChartService {
    renderer: Box<dyn WheelRenderer + Send + Sync>,
}

impl ChartService {
    pub fn new(renderer: impl WheelRenderer + Send + Sync + 'static) -> Self {
        Self {
            renderer: Box::new(renderer),
        }
    }

    /// Runs the full pipeline and returns the sanitized diagram.
    ///
    /// Stages, in order: record extraction, mode selection, preference
    /// resolution, subject construction, rendering, sanitization. The mode
    /// is selected once and threaded through; no stage re-derives it.
    pub fn try_generate(&self, payload: &Value) -> Result<String, PipelineError> {
        if !payload.is_object() {
            return Err(PipelineError::InvalidRequest);
        }
        let request = ChartRequest::new(payload);

        let source = SourceType::from_tag(request.source_type());
        let record = extract_record(payload, source)?;

        // A second payload always carries celebrity/saved-chart style
        // `birth_*` fields, whatever the primary's source type was.
        let second = request
            .synastry_data()
            .map(|v| extract_record(v, SourceType::Chart))
            .transpose()?;

        let mode = select_mode(request.is_transit(), request.synastry_data());
        let prefs = RenderPreferences::from_value(request.user_preferences(), request.theme());

        tracing::info!(
            name = %record.name,
            ?mode,
            source = ?source,
            "generating wheel chart"
        );

        let (first, transiting) = build_subjects(&record, second.as_ref(), &prefs, mode);
        let points = active_points(prefs.rulership, mode);

        let raw = render_wheel_chart(
            self.renderer.as_ref(),
            &first,
            transiting.as_ref(),
            mode,
            &points,
            &prefs.theme,
        )?;
        Ok(sanitize_artifact(&raw, mode))
    }

    /// Infallible entry point: any failure is logged server-side and turned
    /// into the fixed placeholder diagram, so the caller always receives
    /// syntactically valid markup and never a raw error payload.
    pub fn generate(&self, payload: &Value) -> String {
        match self.try_generate(payload) {
            Ok(svg) => svg,
            Err(err) => {
                tracing::error!(error = %err, "chart generation failed; returning fallback diagram");
                fallback_svg(&err.to_string())
            }
        }
    }
}
