//! Inbound payload sanitation.
//!
//! Call-recording tools are not fully controlled senders: payloads arrive
//! with undecodable bytes and invisible Unicode artifacts (zero-width and
//! bidi-control code points) that can corrupt JSON parsing. Sanitation is
//! best-effort recovery up to the JSON boundary; a payload that still fails
//! to parse after cleaning is rejected outright.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::Error;

/// Title used when the payload carries no usable `meeting_title`.
pub const DEFAULT_MEETING_TITLE: &str = "Untitled Meeting";

static INVISIBLE_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex::Regex::new(r"[\u{200B}-\u{200F}\u{202A}-\u{202E}\u{2060}-\u{206F}]").unwrap()
});

#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(default)]
    transcript: Option<String>,
    #[serde(default)]
    meeting_title: Option<String>,
}

/// The decoded and validated webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookPayload {
    pub transcript: String,
    pub meeting_title: String,
}

/// Decodes raw request bytes into a validated payload.
///
/// # Returns
/// * `Ok(WebhookPayload)` with a non-empty, trimmed transcript.
/// * `Err(Error::InvalidPayload)` if the cleaned text is not valid JSON.
/// * `Err(Error::MissingTranscript)` if the transcript is absent or blank.
pub fn sanitize_payload(raw: &[u8]) -> Result<WebhookPayload, Error> {
    let decoded = String::from_utf8_lossy(raw);
    let cleaned = INVISIBLE_CHARS_RE.replace_all(&decoded, "");

    let payload: RawPayload =
        serde_json::from_str(cleaned.trim()).map_err(|_| Error::InvalidPayload)?;

    let transcript = payload
        .transcript
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    if transcript.is_empty() {
        return Err(Error::MissingTranscript);
    }

    let meeting_title = payload
        .meeting_title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_MEETING_TITLE.to_string());

    Ok(WebhookPayload {
        transcript,
        meeting_title,
    })
}
