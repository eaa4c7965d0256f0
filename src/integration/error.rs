use std::fmt;

/// Failures that stop an integral from being computed at all. Problems inside
/// the step-by-step derivation never surface here; they degrade the procedure.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrationError {
    EmptyFunction,
    Parse(String),
    Integration(String),
    /// only one of the two limits was given
    MismatchedLimits,
    InvalidLimit { limit: String, reason: String },
    Config(String),
}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrationError::EmptyFunction => write!(f, "No function was provided"),
            IntegrationError::Parse(msg) => write!(f, "{}", msg),
            IntegrationError::Integration(msg) => write!(f, "Could not integrate: {}", msg),
            IntegrationError::MismatchedLimits => {
                write!(f, "Both limits are required for a definite integral")
            }
            IntegrationError::InvalidLimit { limit, reason } => {
                write!(f, "Invalid limit '{}': {}", limit, reason)
            }
            IntegrationError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for IntegrationError {}

impl From<toml::de::Error> for IntegrationError {
    fn from(e: toml::de::Error) -> Self {
        IntegrationError::Config(e.to_string())
    }
}
