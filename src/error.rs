use thiserror::Error;

/// Errors surfaced by the matching core.
///
/// Absence of a result (no facility in range, empty registry) is never an
/// error; it is reported as `None` or an empty list so the display layer can
/// render its own empty state. Per-record data problems are skipped with a
/// diagnostic rather than failing the whole batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
