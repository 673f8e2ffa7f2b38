mod error;
mod llm;
mod notify;
mod processor;
pub mod sanitizer;
pub mod server;
pub mod tracing;
mod tracker;

pub use error::Error;
pub use llm::openai;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use notify::{
    format_run_digest,
    slack::{SlackClient, SlackError},
    Notifier,
};
pub use processor::{builder::TranscriptProcessorBuilder, RunReport, TranscriptProcessor};
pub use sanitizer::{sanitize_payload, WebhookPayload, DEFAULT_MEETING_TITLE};
pub use tracker::{
    jira::{JiraClient, JiraError},
    BatchCreateResult, CreateFailReason, CreatedIssue, FailedCreate, IssueTracker,
};
