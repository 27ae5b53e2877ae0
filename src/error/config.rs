use thiserror::Error;

/// Error type for startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// A required setting is empty
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// A duration setting is zero
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}
