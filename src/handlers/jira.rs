use crate::jira::client::{JiraClient, JiraSettings};
use crate::pubsub::envelope::PushEnvelope;
use crate::report::ticket::ticket_description;
use reqwest::Client;
use tracing::{debug, error, info};

/// Files one Jira task describing the unattended projects in the message.
pub async fn handle(envelope: PushEnvelope, https: &Client, settings: &JiraSettings) {
    let context = envelope.context();

    let payload = match envelope.decode_payload() {
        Ok(payload) => payload,
        Err(e) => {
            error!(%context, "Dropping undecodable message: {:#}", e);
            return;
        },
    };

    debug!(%context, recommendations = payload.recommendations.len(), "Creating Jira issue");

    let description = ticket_description(&payload);

    match JiraClient::new(https, settings).create_task(description).await {
        Ok(issue) => info!(key = %issue.key, id = %issue.id, "Created Jira issue"),
        Err(e) => error!(%context, "Failed to create Jira issue: {:#}", e),
    }
}
