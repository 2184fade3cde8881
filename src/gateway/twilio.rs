use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::{
    config::Config,
    error::AppError,
    gateway::{CallPlacement, TelephonyGateway},
};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

#[derive(Debug, Deserialize)]
struct CallResponse {
    sid: Option<String>,
}

/// Twilio voice/SMS client (https://www.twilio.com/docs/voice/api/call-resource).
///
/// Calls are placed with inline TwiML that reads the order's message to the
/// recipient. A non-2xx provider response is a failed placement, not an
/// error; only transport faults bubble up as `AppError::ReqwestErr`.
pub struct TwilioGateway {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioGateway {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from_number: config.twilio_from_number.clone(),
        }
    }

    fn call_twiml(message: &str) -> String {
        format!(
            "<Response><Pause length=\"1\"/><Say voice=\"alice\">{}</Say></Response>",
            escape_xml(message)
        )
    }
}

#[async_trait]
impl TelephonyGateway for TwilioGateway {
    async fn place_call(
        &self,
        to_number: &str,
        message: &str,
        order_id: i32,
    ) -> Result<CallPlacement, AppError> {
        let url = format!("{}/Accounts/{}/Calls.json", TWILIO_API_BASE, self.account_sid);
        let twiml = Self::call_twiml(message);

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", to_number),
                ("From", self.from_number.as_str()),
                ("Twiml", twiml.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!(order_id, %status, "Twilio rejected call placement: {}", text);
            return Ok(CallPlacement::failed());
        }

        let call_ref = resp
            .json::<CallResponse>()
            .await
            .ok()
            .and_then(|body| body.sid);

        Ok(CallPlacement { ok: true, call_ref })
    }

    async fn send_sms(&self, to_number: &str, body: &str) -> Result<bool, AppError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.account_sid
        );

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", to_number),
                ("From", self.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!(%status, "Twilio rejected SMS: {}", text);
            return Ok(false);
        }

        Ok(true)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
