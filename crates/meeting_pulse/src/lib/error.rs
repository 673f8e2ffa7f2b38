/// Errors surfaced by the webhook processing pipeline.
///
/// The first two variants are the caller's fault and map to a 400 response;
/// everything else is a server-side failure and maps to a 500 with the
/// details kept in the logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid JSON")]
    InvalidPayload,
    #[error("Transcript required")]
    MissingTranscript,
    #[error("Summarization failed: {0}")]
    Generation(String),
    #[error("Issue creation failed: {0}")]
    Tracker(String),
}

impl Error {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidPayload | Error::MissingTranscript)
    }
}
