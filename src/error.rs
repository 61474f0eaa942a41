use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot evaluate scenario: {reason}")]
    DegenerateGeometry { reason: String },

    #[error("cannot evaluate scenario: {field} = {value} ({reason})")]
    InvalidParameter {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("cannot evaluate scenario: malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ScenarioError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        ScenarioError::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, value: f64, reason: &'static str) -> Self {
        ScenarioError::InvalidParameter {
            field: field.into(),
            value,
            reason,
        }
    }
}
