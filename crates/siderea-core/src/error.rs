pub type Result<T> = std::result::Result<T, Error>;

/// Input-side failures. Every variant means no usable canonical record can be
/// built from the request; callers route these to the fallback diagram.
///
/// Non-fatal conditions (unknown country names, unrecognized preference
/// values, malformed coordinates) are *not* errors: they are substituted with
/// documented defaults and logged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No chart data provided")]
    MissingChartData,

    #[error("Missing birth_date field")]
    MissingBirthDate,

    #[error("Invalid birth_date format: {value}")]
    InvalidBirthDate { value: String },
}
