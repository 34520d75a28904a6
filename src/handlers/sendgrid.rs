use crate::pubsub::envelope::PushEnvelope;
use crate::report::email::email_report;
use crate::sendgrid::client::{SendGridClient, SendGridSettings};
use crate::sendgrid::mail::{Mail, MAIL_SUBJECT};
use reqwest::Client;
use tracing::{debug, error, info};

/// Emails the project contacts about their unattended projects, CCing the
/// escalation contacts on repeat notices.
pub async fn handle(envelope: PushEnvelope, https: &Client, settings: &SendGridSettings) {
    let context = envelope.context();

    let payload = match envelope.decode_payload() {
        Ok(payload) => payload,
        Err(e) => {
            error!(%context, "Dropping undecodable message: {:#}", e);
            return;
        },
    };

    let contacts = match payload.contacts() {
        Ok(contacts) => contacts,
        Err(e) => {
            error!(%context, "Dropping message with unreadable contacts: {:#}", e);
            return;
        },
    };

    let report = email_report(&payload, &contacts);

    debug!(
        %context,
        recipients = report.recipients.len(),
        cc = report.cc.len(),
        "Sending notification email"
    );

    let mail = Mail::new(&settings.sender_email, MAIL_SUBJECT, report.html)
        .to(&report.recipients)
        .cc(&report.cc)
        .reply_to(&settings.reply_to_email)
        .build();

    match SendGridClient::new(https, settings).send(&mail).await {
        Ok(response) => info!(
            status = %response.status,
            body = %response.body,
            headers = ?response.headers,
            "Sent notification email"
        ),
        Err(e) => error!(%context, "Failed to send notification email: {:#}", e),
    }
}
