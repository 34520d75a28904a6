use crate::pubsub::payload::{NotificationPayload, Recommendation};
use crate::report::columns::Column;
use crate::report::recommendation_link;
use strum::IntoEnumIterator;

/// Builds the Jira wiki markup description for an unattended projects ticket.
pub fn ticket_description(payload: &NotificationPayload) -> String {
    let mut description = format!(
        "You have Google Cloud project(s) that are not being used. \
         We recommend you remove those project(s). \
         Please review if the project(s) are still needed. \
         This is notice #{}. ",
        payload.num_passes
    );

    description.push_str("\n||");
    for column in Column::iter() {
        description.push_str(column.ticket_header());
        description.push_str("||");
    }
    description.push('\n');

    for recommendation in &payload.recommendations {
        description.push_str(&row(payload, recommendation));
    }

    if payload.is_dry_run() {
        description.push_str("Projects will be deleted after their TTL date.\n");
    }

    description
}

fn row(payload: &NotificationPayload, recommendation: &Recommendation) -> String {
    let mut row = String::from("|");

    for column in Column::iter() {
        let cell = match column {
            Column::ProjectId => recommendation.project_id.clone(),
            Column::UsageDetails => format!("[Review|{}]", recommendation_link(recommendation)),
            _ if payload.is_dry_run() => "n/a".to_string(),
            Column::TtlDate => recommendation.ttl_formatted_timestamp.clone(),
            Column::Deleted => recommendation.deleted.clone(),
        };

        row.push_str(&cell);
        row.push('|');
    }

    row.push('\n');
    row
}
