use reqwest::{Client, StatusCode};
use serde::Deserialize;
use ticket_extract::TicketRecord;

use crate::tracker::{
    BatchCreateResult, CreateFailReason, CreatedIssue, FailedCreate, IssueTracker,
};

pub struct JiraClient {
    client: Client,
    email: String,
    api_token: String,
    project_key: String,
    issue_type: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum JiraError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct CreateIssueResponse {
    key: String,
}

impl JiraClient {
    pub fn new(
        domain: impl AsRef<str>,
        email: impl Into<String>,
        api_token: impl Into<String>,
        project_key: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            email: email.into(),
            api_token: api_token.into(),
            project_key: project_key.into(),
            issue_type: issue_type.into(),
            base_url: format!("https://{}", domain.as_ref()),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl IssueTracker for JiraClient {
    type Error = JiraError;

    #[tracing::instrument(skip_all, fields(count = tickets.len()))]
    async fn create_issues(&self, tickets: &[TicketRecord]) -> Result<BatchCreateResult, JiraError> {
        let mut result = BatchCreateResult::default();

        for ticket in tickets {
            let body = serde_json::json!({
                "fields": {
                    "project": { "key": self.project_key },
                    "summary": ticket.title,
                    "description": ticket.description,
                    "issuetype": { "name": self.issue_type },
                }
            });

            let resp = self
                .client
                .post(format!("{}/rest/api/3/issue", self.base_url))
                .basic_auth(&self.email, Some(&self.api_token))
                .json(&body)
                .send()
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

            let status = resp.status();
            if status == StatusCode::CREATED {
                let created = resp.json::<CreateIssueResponse>().await?;
                tracing::info!(key = %created.key, summary = %ticket.title, "Created issue");
                result.created.push(CreatedIssue {
                    url: format!("{}/browse/{}", self.base_url, created.key),
                    key: created.key,
                });
            } else {
                let message = resp.text().await.unwrap_or_default();
                tracing::error!(
                    status = status.as_u16(),
                    summary = %ticket.title,
                    message = %message,
                    "Failed to create issue"
                );
                result.failed_creates.push(FailedCreate {
                    title: ticket.title.clone(),
                    reason: CreateFailReason::Rejected {
                        status: status.as_u16(),
                        message,
                    },
                });
            }
        }

        Ok(result)
    }
}
