use crate::jira::client::JiraSettings;
use crate::sendgrid::client::SendGridSettings;
use reqwest::Client;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub https: Client,
    pub jira: Arc<JiraSettings>,
    pub sendgrid: Arc<SendGridSettings>,
}

impl App {
    pub fn new() -> Self {
        Self::from_lookup(&|name: &str| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            https: Client::new(),
            jira: Arc::new(JiraSettings::from_lookup(lookup)),
            sendgrid: Arc::new(SendGridSettings::from_lookup(lookup)),
        }
    }
}
