//! Error type for the summary transformations.

use thiserror::Error;

/// Failures raised by tick computation and table projection.
///
/// Network, file, and JSON failures stay at the edges as [`anyhow::Error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid schema: required field `{field}` is missing")]
    InvalidSchema { field: String },
}

impl SummaryError {
    pub(crate) fn missing_field(field: &str) -> Self {
        SummaryError::InvalidSchema {
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = SummaryError::missing_field("driver");
        assert_eq!(
            err.to_string(),
            "invalid schema: required field `driver` is missing"
        );
    }
}
