//! Error types for CWR generation and ACK parsing.
//!
//! Both operations distinguish fatal errors (the whole call fails, every
//! contributing cause aggregated into one value) from non-fatal issues
//! that are attached to an otherwise successful result.

use thiserror::Error;

/// Fatal errors that abort an entire export.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// One or more works have no writers at all.
    ///
    /// Aggregates every offending work so the caller can fix the whole
    /// batch in one pass.
    #[error("{count} work(s) have no writers: {codes}", count = .0.len(), codes = .0.join(", "))]
    WorksWithoutWriters(Vec<String>),

    /// The batch itself was empty.
    #[error("no works supplied")]
    EmptyBatch,
}

/// Fatal errors that abort an acknowledgement parse.
///
/// Malformed body lines are never fatal; they are collected on the
/// summary instead.
#[derive(Debug, Error)]
pub enum AckError {
    /// Fewer than header + one body line + trailer.
    #[error("acknowledgement file has {lines} non-empty line(s); at least 3 required")]
    TooShort { lines: usize },
}

/// Result type alias for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_error_lists_every_work() {
        let err = GenerateError::WorksWithoutWriters(vec![
            "W001".to_string(),
            "W007".to_string(),
        ]);
        let text = format!("{err}");
        assert!(text.contains("2 work(s)"));
        assert!(text.contains("W001"));
        assert!(text.contains("W007"));
    }

    #[test]
    fn too_short_display() {
        let err = AckError::TooShort { lines: 2 };
        assert_eq!(
            format!("{err}"),
            "acknowledgement file has 2 non-empty line(s); at least 3 required"
        );
    }
}
