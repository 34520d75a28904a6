pub mod jira;
pub mod sendgrid;
