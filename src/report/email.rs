use crate::pubsub::payload::{Contacts, NotificationPayload, Recommendation};
use crate::report::columns::Column;
use crate::report::recommendation_link;
use std::collections::HashSet;
use strum::IntoEnumIterator;

const RESTORE_PROJECT_DOCS: &str =
    "https://cloud.google.com/resource-manager/docs/creating-managing-projects#restoring_a_project";

/// Rendered notification email plus who receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReport {
    pub html: String,
    pub recipients: Vec<String>,
    pub cc: Vec<String>,
}

/// Without project contacts the escalation contacts are both the recipients
/// and, on repeat notices, the CC list.
pub fn email_report(payload: &NotificationPayload, contacts: &Contacts) -> EmailReport {
    let escalation = escalation_contacts(&contacts.escalation, &contacts.project);

    let mut html = lead(payload);
    if !payload.is_first_notice() {
        html.push_str(&format!(
            "{} have been CCed, since they are listed as the Essential Contacts \
             or are the parent resource owner.<br/><br/>",
            escalation.join(", ")
        ));
    }
    html.push_str(&table(payload));

    let recipients = if contacts.project.is_empty() {
        escalation.clone()
    } else {
        contacts.project.clone()
    };

    let cc = if payload.is_first_notice() {
        Vec::new()
    } else {
        escalation
    };

    EmailReport { html, recipients, cc }
}

/// Escalation contacts without duplicates and without anyone already in the
/// project contacts, since a project contact cannot also be CCed.
pub fn escalation_contacts(escalation: &[String], project: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = project.iter().map(String::as_str).collect();

    escalation
        .iter()
        .filter(|contact| seen.insert(contact.as_str()))
        .cloned()
        .collect()
}

fn lead(payload: &NotificationPayload) -> String {
    let mut lead = String::from("You are an Owner on Google Cloud projects that are not being used. ");

    if payload.any_deleted() {
        lead.push_str(&format!(
            "Some of these projects have been deleted due to no action taken during the previous notices. \
             <br/><br/>If you would like to recover any of the projects deleted, you can try restoring them \
             with  the steps listed <a href=\"{}\">here</a>.<br/><br/>",
            RESTORE_PROJECT_DOCS
        ));
    } else {
        lead.push_str(&format!(
            "We recommend you remove those projects. \
             Please review if the projects are still needed.<br/><br/>\
             This is notice #{}.<br/><br/>",
            payload.num_passes
        ));

        if payload.is_live_run() {
            lead.push_str(
                "If projects are not deleted or recommendations are not dismissed, \
                 projects will be deleted on or after their TTL date.<br/><br/>",
            );
        }
    }

    lead
}

fn table(payload: &NotificationPayload) -> String {
    let columns: Vec<Column> = Column::iter()
        .filter(|column| payload.is_live_run() || !column.live_only())
        .collect();

    let mut table = String::from("<table><tr>");
    for column in &columns {
        table.push_str(&format!("<td>{}</td>", column.email_header()));
    }
    table.push_str("</tr>");

    for recommendation in &payload.recommendations {
        table.push_str("<tr>");
        for column in &columns {
            table.push_str(&format!("<td>{}</td>", cell(*column, recommendation)));
        }
        table.push_str("</tr>");
    }

    table.push_str("</table>");
    table
}

fn cell(column: Column, recommendation: &Recommendation) -> String {
    match column {
        Column::ProjectId => recommendation.project_id.clone(),
        Column::UsageDetails => format!("<a href=\"{}\">Review</a>", recommendation_link(recommendation)),
        Column::TtlDate => recommendation.ttl_formatted_timestamp.clone(),
        Column::Deleted => recommendation.deleted.clone(),
    }
}
