use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::{config::Config, error::AppError, gateway::EmailGateway};

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid transactional mail client
/// (https://www.twilio.com/docs/sendgrid/api-reference/mail-send/mail-send).
pub struct SendGridGateway {
    http: reqwest::Client,
    api_key: String,
    from_email: String,
}

impl SendGridGateway {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key: config.sendgrid_api_key.clone(),
            from_email: config.sendgrid_from_email.clone(),
        }
    }
}

#[async_trait]
impl EmailGateway for SendGridGateway {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<bool, AppError> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.from_email },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html_body }]
        });

        let resp = self
            .http
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!(%status, "SendGrid rejected email: {}", text);
            return Ok(false);
        }

        Ok(true)
    }
}
