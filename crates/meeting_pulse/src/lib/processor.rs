pub mod builder;

use ticket_extract::extract_tickets;

use crate::{
    error::Error,
    llm::summarizer::Summarizer,
    notify::{format_run_digest, Notifier},
    sanitizer::sanitize_payload,
    tracker::{CreatedIssue, FailedCreate, IssueTracker},
};

/// The core webhook pipeline: sanitize the payload, summarize the transcript,
/// extract ticket records, create issues, post a run digest.
///
/// Everything is request-scoped; the processor itself only holds the
/// collaborator clients and is shared read-only across requests.
pub struct TranscriptProcessor<S, N, T>
where
    S: Summarizer + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: IssueTracker + Send + Sync + 'static,
{
    summarizer: S,
    notifier: N,
    tracker: T,
}

/// Outcome of a single webhook run.
#[derive(Debug)]
pub struct RunReport {
    pub meeting_title: String,
    pub created: Vec<CreatedIssue>,
    pub failed_creates: Vec<FailedCreate>,
}

impl<S, N, T> TranscriptProcessor<S, N, T>
where
    S: Summarizer + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: IssueTracker + Send + Sync + 'static,
{
    #[tracing::instrument(skip_all)]
    pub async fn run(&self, raw_body: &[u8]) -> Result<RunReport, Error> {
        let payload = sanitize_payload(raw_body)?;
        tracing::info!(meeting_title = %payload.meeting_title, "Processing transcript");

        let summary = self
            .summarizer
            .summarize(&payload.transcript)
            .await
            .map_err(|e| Error::Generation(format!("{e:?}")))?;

        let tickets = extract_tickets(&summary.summary);
        tracing::info!(count = tickets.len(), "Extracted ticket candidates");

        let batch = self
            .tracker
            .create_issues(&tickets)
            .await
            .map_err(|e| Error::Tracker(format!("{e:?}")))?;

        for failed in &batch.failed_creates {
            tracing::warn!(title = %failed.title, reason = ?failed.reason, "Issue was not created");
        }

        // Best-effort delivery: a digest that never arrives must not fail
        // a transcript that was already processed.
        let digest = format_run_digest(
            &payload.meeting_title,
            &batch.created,
            &batch.failed_creates,
        );
        if let Err(e) = self.notifier.post_message(&digest).await {
            tracing::warn!(error = ?e, "Failed to post run digest");
        }

        Ok(RunReport {
            meeting_title: payload.meeting_title,
            created: batch.created,
            failed_creates: batch.failed_creates,
        })
    }
}
