use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use meeting_pulse::{
    BatchCreateResult, CreateFailReason, CreatedIssue, FailedCreate, IssueTracker,
};
use ticket_extract::TicketRecord;

#[derive(Clone)]
pub struct MockTracker {
    /// One entry per create_issues call, holding the batch it received.
    pub batches: Arc<Mutex<Vec<Vec<TicketRecord>>>>,
    /// Titles the tracker rejects with a per-item failure.
    pub reject_titles: HashSet<String>,
    pub fail_with: Option<String>,
}

impl Default for MockTracker {
    fn default() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            reject_titles: HashSet::new(),
            fail_with: None,
        }
    }
}

impl MockTracker {
    pub fn rejecting(titles: &[&str]) -> Self {
        Self {
            reject_titles: titles.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl IssueTracker for MockTracker {
    type Error = anyhow::Error;

    async fn create_issues(&self, tickets: &[TicketRecord]) -> Result<BatchCreateResult, Self::Error> {
        self.batches.lock().unwrap().push(tickets.to_vec());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }

        let mut result = BatchCreateResult::default();
        for (i, ticket) in tickets.iter().enumerate() {
            if self.reject_titles.contains(&ticket.title) {
                result.failed_creates.push(FailedCreate {
                    title: ticket.title.clone(),
                    reason: CreateFailReason::Rejected {
                        status: 400,
                        message: "rejected by mock".to_string(),
                    },
                });
            } else {
                let key = format!("MP-{}", i + 1);
                result.created.push(CreatedIssue {
                    url: format!("https://tracker.local/browse/{key}"),
                    key,
                });
            }
        }
        Ok(result)
    }
}
