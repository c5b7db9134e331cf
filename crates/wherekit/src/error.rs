use thiserror::Error as ThisError;

///
/// FilterError
///
/// Failures raised while decoding untrusted filter input at the boundary.
/// Evaluation itself never errors; these only surface before a filter object
/// exists.
///

#[derive(Debug, ThisError)]
pub enum FilterError {
    #[error("unknown filter operator '{name}'")]
    UnknownOperator { name: String },

    #[error("expected a filter object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unsupported filter value: {message}")]
    UnsupportedValue { message: String },

    #[error("malformed filter payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    pub(crate) fn unknown_operator(name: impl Into<String>) -> Self {
        Self::UnknownOperator { name: name.into() }
    }

    pub(crate) fn unsupported_value(message: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            message: message.into(),
        }
    }

    /// Stable error class label for adapter diagnostics.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::UnknownOperator { .. } => "unknown_operator",
            Self::NotAnObject { .. } => "not_an_object",
            Self::UnsupportedValue { .. } => "unsupported_value",
            Self::Json(_) => "json",
        }
    }
}
