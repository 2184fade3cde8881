use thiserror::Error;

/// Configuration errors raised while loading environment variables or
/// validating startup parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The retry policy constants are inconsistent (e.g. the number of call
    /// hours does not match the calls-per-day cap).
    #[error("Invalid retry policy: {0}")]
    InvalidRetryPolicy(String),
}
