use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    /// Public site URL, used in recipient-facing fallback messages.
    pub app_url: String,
    pub support_email: String,

    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,

    pub sendgrid_api_key: String,
    pub sendgrid_from_email: String,

    pub retry: RetryPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let retry = RetryPolicy::default();
        retry.validate()?;

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            app_url: require_env("APP_URL")?,
            support_email: require_env("SUPPORT_EMAIL")?,
            twilio_account_sid: require_env("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: require_env("TWILIO_AUTH_TOKEN")?,
            twilio_from_number: require_env("TWILIO_FROM_NUMBER")?,
            sendgrid_api_key: require_env("SENDGRID_API_KEY")?,
            sendgrid_from_email: require_env("SENDGRID_FROM_EMAIL")?,
            retry,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Retry strategy constants: 3 calls per day for 3 days at fixed hours.
///
/// The schedule is data rather than code so the 9-attempt cap is derived
/// from `max_days * calls_per_day` instead of being repeated as a literal.
/// `validate` is called at startup; an inconsistent policy aborts boot.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Hours of day (reference clock) at which call attempts fire.
    pub call_hours: Vec<u32>,
    /// Length of the retry window in days.
    pub max_days: u32,
    /// Attempt cap within a single day.
    pub calls_per_day: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            call_hours: vec![9, 12, 15],
            max_days: 3,
            calls_per_day: 3,
        }
    }
}

impl RetryPolicy {
    /// Total attempt cap across the whole retry window.
    pub fn max_attempts(&self) -> i32 {
        (self.max_days * self.calls_per_day) as i32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.call_hours.len() != self.calls_per_day as usize {
            return Err(ConfigError::InvalidRetryPolicy(format!(
                "{} call hours configured for {} calls per day",
                self.call_hours.len(),
                self.calls_per_day
            )));
        }
        if self.call_hours.iter().any(|&h| h >= 24) {
            return Err(ConfigError::InvalidRetryPolicy(
                "call hours must be valid hours of day".to_string(),
            ));
        }
        if self.call_hours.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRetryPolicy(
                "call hours must be strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}
