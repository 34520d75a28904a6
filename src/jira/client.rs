use crate::jira::issue::{CreateIssue, CreatedIssue};
use crate::utils::{env_or_placeholder, secret_or_placeholder};
use anyhow::{bail, Context};
use reqwest::Client;

#[derive(Clone, Debug)]
pub struct JiraSettings {
    pub api_key: String,
    pub administrator_email: String,
    pub server_address: String,
    pub project_id: String,
    pub assignee_account_id: String,
}

impl JiraSettings {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: secret_or_placeholder(lookup, "jira-key"),
            administrator_email: env_or_placeholder(lookup, "JIRA_ADMINISTRATOR_EMAIL"),
            server_address: env_or_placeholder(lookup, "JIRA_SERVER_ADDRESS"),
            project_id: env_or_placeholder(lookup, "JIRA_PROJECT_ID"),
            assignee_account_id: env_or_placeholder(lookup, "JIRA_ASSIGNEE_ACCOUNT_ID"),
        }
    }
}

pub struct JiraClient<'a> {
    https: &'a Client,
    settings: &'a JiraSettings,
}

impl<'a> JiraClient<'a> {
    pub fn new(https: &'a Client, settings: &'a JiraSettings) -> Self {
        Self { https, settings }
    }

    pub async fn create_task(&self, description: String) -> anyhow::Result<CreatedIssue> {
        let url = format!(
            "{}/rest/api/2/issue",
            self.settings.server_address.trim_end_matches('/')
        );
        let request = CreateIssue::task(
            &self.settings.project_id,
            &self.settings.assignee_account_id,
            description,
        );

        let response = self
            .https
            .post(url)
            .basic_auth(&self.settings.administrator_email, Some(&self.settings.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to reach the Jira server")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Jira rejected the issue: status {}, body: {}", status, body);
        }

        Ok(response.json::<CreatedIssue>().await?)
    }
}
