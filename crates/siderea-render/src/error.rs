pub type Result<T> = std::result::Result<T, Error>;

/// Render-side failures. All of these abort the pipeline and route to the
/// fallback diagram; sanitization problems deliberately do not appear here
/// (the unsanitized artifact flows on instead).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to encode render job: {0}")]
    EncodeJob(#[from] serde_json::Error),

    #[error("Failed to launch renderer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Renderer exited with {status}: {stderr}")]
    RendererFailed { status: String, stderr: String },

    #[error("Renderer output I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Renderer produced no SVG artifact")]
    NoArtifact,

    #[error("Generated SVG file is empty or invalid")]
    InvalidArtifact,
}
