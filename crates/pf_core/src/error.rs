use thiserror::Error;

/// Errors raised before any field computation starts.
///
/// Degenerate inputs (empty teams, empty axes, coincident positions,
/// zero-length passes) are not errors; they have defined outputs.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FieldError {
    /// Short machine-readable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::InvalidParameter { .. } => "E_PARAM",
            FieldError::InvalidConfig(_) => "E_CONFIG",
            FieldError::Serialization(_) => "E_PARSE",
            FieldError::Yaml(_) => "E_PARSE",
            FieldError::Io(_) => "E_IO",
        }
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FieldError::InvalidParameter { name, value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(FieldError::InvalidParameter { name, value, reason: "must be > 0" });
    }
    Ok(value)
}

/// Require `value` to be finite and non-negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FieldError::InvalidParameter { name, value, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(FieldError::InvalidParameter { name, value, reason: "must be >= 0" });
    }
    Ok(value)
}

pub type Result<T> = std::result::Result<T, FieldError>;
