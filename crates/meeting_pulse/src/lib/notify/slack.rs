use reqwest::Client;
use serde::Deserialize;

use crate::notify::Notifier;

pub struct SlackClient {
    client: Client,
    token: String,
    channel_id: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

// Slack reports most failures as HTTP 200 with `"ok": false` in the body,
// so both the status and the `ok` field are checked.
#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

impl SlackClient {
    pub fn new(token: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            channel_id: channel_id.into(),
            base_url: "https://slack.com/api".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Notifier for SlackClient {
    type Error = SlackError;

    async fn post_message(&self, text: &str) -> Result<(), Self::Error> {
        let body = serde_json::json!({
            "channel": self.channel_id,
            "text": text,
        });

        let resp = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SlackError::Api { status, message });
        }

        let ack = resp.json::<PostMessageResponse>().await?;
        if !ack.ok {
            return Err(SlackError::Api {
                status: 200,
                message: ack.error.unwrap_or_else(|| "unknown error".into()),
            });
        }

        Ok(())
    }
}
