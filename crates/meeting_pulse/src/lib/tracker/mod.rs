pub mod jira;

use std::{fmt::Debug, future::Future};

use ticket_extract::TicketRecord;

/// An issue tracker destination for extracted ticket records.
///
/// Creation is batch-oriented with per-item outcomes: an issue the tracker
/// rejects is recorded as a failure and the batch continues, while a
/// transport-level error aborts the remaining creations. Issues already
/// created stay created, there is no rollback.
pub trait IssueTracker {
    type Error: Debug;

    fn create_issues(
        &self,
        tickets: &[TicketRecord],
    ) -> impl Future<Output = Result<BatchCreateResult, Self::Error>> + Send;
}

#[derive(Debug, Default)]
pub struct BatchCreateResult {
    pub created: Vec<CreatedIssue>,
    pub failed_creates: Vec<FailedCreate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub key: String,
    pub url: String,
}

#[derive(Debug)]
pub struct FailedCreate {
    pub title: String,
    pub reason: CreateFailReason,
}

#[derive(Debug)]
pub enum CreateFailReason {
    Rejected { status: u16, message: String },
}
