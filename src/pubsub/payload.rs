use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

/// Message published by the project cleanup job after each pass.
///
/// Flags are carried as the strings `"true"`/`"false"`, so the helpers below
/// compare against the literal values rather than parsing them into booleans.
/// The contact lists are JSON-encoded arrays inside a string and stay raw
/// until [`NotificationPayload::contacts`] is called, since only the email
/// needs them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub num_passes: String,
    #[serde(rename = "isDryRun")]
    pub dry_run: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub escalation_contacts: Value,
    #[serde(default)]
    pub project_contacts: Value,
}

/// Contact lists decoded from a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    pub escalation: Vec<String>,
    pub project: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub project_id: String,
    pub project_number: String,
    pub recommendation_id: String,
    #[serde(default)]
    pub ttl_formatted_timestamp: String,
    #[serde(rename = "isDeleted", default)]
    pub deleted: String,
}

impl NotificationPayload {
    /// The ticket renders placeholder values only for an explicit `"true"`.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run == "true"
    }

    /// The email shows TTL and deletion columns only for an explicit `"false"`.
    pub fn is_live_run(&self) -> bool {
        self.dry_run == "false"
    }

    pub fn is_first_notice(&self) -> bool {
        self.num_passes == "1"
    }

    pub fn any_deleted(&self) -> bool {
        self.recommendations.iter().any(Recommendation::is_deleted)
    }

    pub fn contacts(&self) -> anyhow::Result<Contacts> {
        Ok(Contacts {
            escalation: contact_list(&self.escalation_contacts)
                .context("escalationContacts is not a list of addresses")?,
            project: contact_list(&self.project_contacts)
                .context("projectContacts is not a list of addresses")?,
        })
    }
}

impl Recommendation {
    pub fn is_deleted(&self) -> bool {
        self.deleted == "true"
    }
}

fn contact_list(raw: &Value) -> anyhow::Result<Vec<String>> {
    match raw {
        Value::Null => Ok(Vec::new()),
        Value::String(encoded) if encoded.trim().is_empty() => Ok(Vec::new()),
        Value::String(encoded) => Ok(serde_json::from_str(encoded)?),
        plain => Ok(serde_json::from_value(plain.clone())?),
    }
}
