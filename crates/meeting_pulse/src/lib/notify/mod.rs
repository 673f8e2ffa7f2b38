pub mod slack;

use std::{fmt::Debug, future::Future};

use crate::tracker::{CreatedIssue, FailedCreate};

/// A chat destination for run digests. Delivery is best-effort: the pipeline
/// logs failures and moves on, so implementations should not retry.
pub trait Notifier {
    type Error: Debug;

    fn post_message(&self, text: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Renders a human-readable digest of a run: meeting title, ticket count,
/// one line per created issue. Pure formatting, no error conditions.
pub fn format_run_digest(
    meeting_title: &str,
    created: &[CreatedIssue],
    failed: &[FailedCreate],
) -> String {
    let mut digest = format!(
        "*📋 {meeting_title}*\n{} ticket(s) created from the meeting transcript",
        created.len()
    );

    for issue in created {
        digest.push_str(&format!("\n• <{}|{}>", issue.url, issue.key));
    }

    if !failed.is_empty() {
        digest.push_str(&format!(
            "\n⚠️ {} ticket(s) could not be created, see logs",
            failed.len()
        ));
    }

    digest
}
