use crate::pubsub::payload::NotificationPayload;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Body of a Pub/Sub push request.
#[derive(Debug, Deserialize)]
pub struct PushEnvelope {
    pub message: PubsubMessage,
    #[serde(default)]
    pub subscription: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubsubMessage {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub publish_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl PushEnvelope {
    pub fn decode_payload(&self) -> anyhow::Result<NotificationPayload> {
        let bytes = STANDARD
            .decode(self.message.data.trim())
            .context("message data is not valid base64")?;

        serde_json::from_slice(&bytes).context("message data is not a valid notification payload")
    }

    pub fn context(&self) -> TriggerContext {
        TriggerContext {
            message_id: self.message.message_id.clone(),
            publish_time: self.message.publish_time,
            subscription: self.subscription.clone(),
            attributes: self.message.attributes.clone(),
        }
    }
}

/// Metadata about the delivery that triggered a handler, logged next to
/// any failure so the message can be traced back on the platform side.
#[derive(Debug, Clone, Default)]
pub struct TriggerContext {
    pub message_id: Option<String>,
    pub publish_time: Option<DateTime<Utc>>,
    pub subscription: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl fmt::Display for TriggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message_id={} publish_time={} subscription={}",
            self.message_id.as_deref().unwrap_or("unknown"),
            self.publish_time
                .map(|time| time.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string()),
            self.subscription.as_deref().unwrap_or("unknown"),
        )?;

        if !self.attributes.is_empty() {
            write!(f, " attributes={:?}", self.attributes)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encoded(payload: &serde_json::Value) -> String {
        STANDARD.encode(payload.to_string())
    }

    #[test]
    fn decodes_push_envelope_and_payload() {
        let payload = json!({
            "numPasses": "2",
            "isDryRun": "false",
            "recommendations": [{
                "projectId": "idle-project",
                "projectNumber": "123456",
                "recommendationId": "rec-1",
                "ttlFormattedTimestamp": "2022-08-01",
                "isDeleted": "false"
            }],
            "escalationContacts": "[\"owner@example.com\"]",
            "projectContacts": "[]"
        });
        let body = json!({
            "message": {
                "data": encoded(&payload),
                "messageId": "42",
                "publishTime": "2022-07-01T10:00:00Z",
                "attributes": { "origin": "scheduler" }
            },
            "subscription": "projects/p/subscriptions/cleanup-jira"
        });

        let envelope: PushEnvelope = serde_json::from_value(body).unwrap();
        let decoded = envelope.decode_payload().unwrap();

        assert_eq!(decoded.num_passes, "2");
        assert_eq!(decoded.recommendations.len(), 1);
        let contacts = decoded.contacts().unwrap();
        assert_eq!(contacts.escalation, vec!["owner@example.com"]);
        assert!(contacts.project.is_empty());

        let context = envelope.context().to_string();
        assert!(context.contains("message_id=42"));
        assert!(context.contains("publish_time=2022-07-01T10:00:00+00:00"));
        assert!(context.contains("subscription=projects/p/subscriptions/cleanup-jira"));
        assert!(context.contains("origin"));
    }

    #[test]
    fn context_defaults_to_unknown() {
        let envelope: PushEnvelope = serde_json::from_value(json!({ "message": {} })).unwrap();

        assert_eq!(
            envelope.context().to_string(),
            "message_id=unknown publish_time=unknown subscription=unknown"
        );
    }

    #[test]
    fn rejects_data_that_is_not_base64() {
        let envelope: PushEnvelope =
            serde_json::from_value(json!({ "message": { "data": "%%%" } })).unwrap();

        let error = envelope.decode_payload().unwrap_err();
        assert!(error.to_string().contains("base64"));
    }

    #[test]
    fn rejects_data_that_is_not_a_payload() {
        let envelope: PushEnvelope = serde_json::from_value(json!({
            "message": { "data": STANDARD.encode("{\"hello\": true}") }
        }))
        .unwrap();

        let error = envelope.decode_payload().unwrap_err();
        assert!(error.to_string().contains("notification payload"));
    }
}
