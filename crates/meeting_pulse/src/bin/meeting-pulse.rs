use std::sync::Arc;

use clap::Parser;
use meeting_pulse::{
    openai::OpenAIClient, server, tracing::init_tracing_subscriber, JiraClient, SlackClient,
    TranscriptProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "meeting-pulse", about = "Meeting transcript webhook processor")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Slack bot token used to post run digests
    #[arg(long, env = "SLACK_BOT_TOKEN")]
    slack_token: String,

    /// Slack channel that receives run digests
    #[arg(long, env = "SLACK_CHANNEL_ID")]
    slack_channel: String,

    /// Jira site domain, e.g. acme.atlassian.net
    #[arg(long, env = "JIRA_DOMAIN")]
    jira_domain: String,

    /// Email of the Jira API user
    #[arg(long, env = "JIRA_EMAIL")]
    jira_email: String,

    /// Jira API token
    #[arg(long, env = "JIRA_API_TOKEN")]
    jira_token: String,

    /// Key of the Jira project that receives created issues
    #[arg(long, env = "JIRA_PROJECT_KEY")]
    jira_project: String,

    /// Issue type assigned to created issues
    #[arg(long, env = "JIRA_ISSUE_TYPE", default_value = "Story")]
    jira_issue_type: String,

    /// Port the webhook server binds to
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let summarizer = OpenAIClient::new(&cli.openai_key);
    let notifier = SlackClient::new(&cli.slack_token, &cli.slack_channel);
    let tracker = JiraClient::new(
        &cli.jira_domain,
        &cli.jira_email,
        &cli.jira_token,
        &cli.jira_project,
        &cli.jira_issue_type,
    );

    let processor = TranscriptProcessorBuilder::new()
        .summarizer(summarizer)
        .notifier(notifier)
        .tracker(tracker)
        .build();

    server::serve(cli.port, Arc::new(processor)).await
}
