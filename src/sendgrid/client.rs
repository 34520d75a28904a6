use crate::sendgrid::mail::Mail;
use crate::utils::{env_or_placeholder, secret_or_placeholder};
use anyhow::{bail, Context};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};

pub const DEFAULT_API_BASE_URL: &str = "https://api.sendgrid.com";

#[derive(Clone, Debug)]
pub struct SendGridSettings {
    pub api_key: String,
    pub sender_email: String,
    pub reply_to_email: String,
    pub api_base_url: String,
}

impl SendGridSettings {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: secret_or_placeholder(lookup, "sendgrid-key"),
            sender_email: env_or_placeholder(lookup, "SENDER_EMAIL"),
            reply_to_email: env_or_placeholder(lookup, "REPLY_TO_EMAIL"),
            api_base_url: lookup("SENDGRID_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct SendGridResponse {
    pub status: StatusCode,
    pub body: String,
    pub headers: HeaderMap,
}

pub struct SendGridClient<'a> {
    https: &'a Client,
    settings: &'a SendGridSettings,
}

impl<'a> SendGridClient<'a> {
    pub fn new(https: &'a Client, settings: &'a SendGridSettings) -> Self {
        Self { https, settings }
    }

    pub async fn send(&self, mail: &Mail) -> anyhow::Result<SendGridResponse> {
        let url = format!(
            "{}/v3/mail/send",
            self.settings.api_base_url.trim_end_matches('/')
        );

        let response = self
            .https
            .post(url)
            .bearer_auth(&self.settings.api_key)
            .json(mail)
            .send()
            .await
            .context("Failed to reach SendGrid")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            bail!("SendGrid rejected the mail: status {}, body: {}", status, body);
        }

        Ok(SendGridResponse {
            status,
            body,
            headers,
        })
    }
}
