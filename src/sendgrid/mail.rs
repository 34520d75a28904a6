use serde::Serialize;

pub const MAIL_SUBJECT: &str = "Unattended GCP Projects Were Detected";

/// Body of a SendGrid v3 `mail/send` request with a single personalization.
#[derive(Debug, Serialize)]
pub struct Mail {
    personalizations: [Personalization; 1],
    from: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<EmailAddress>,
    subject: String,
    content: Vec<Content>,
}

#[derive(Debug, Default, Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(rename = "type")]
    mime_type: &'static str,
    value: String,
}

impl EmailAddress {
    fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: None,
        }
    }
}

impl Mail {
    pub fn new(from: &str, subject: &str, html: String) -> Self {
        Self {
            personalizations: [Personalization::default()],
            from: EmailAddress::new(from),
            reply_to: None,
            subject: subject.to_string(),
            content: vec![Content {
                mime_type: "text/html",
                value: html,
            }],
        }
    }

    pub fn to(mut self, emails: &[String]) -> Self {
        self.personalizations[0]
            .to
            .extend(emails.iter().map(|email| EmailAddress::new(email)));
        self
    }

    /// CCed addresses are also shown under their own address as the name.
    pub fn cc(mut self, emails: &[String]) -> Self {
        self.personalizations[0].cc.extend(emails.iter().map(|email| EmailAddress {
            email: email.clone(),
            name: Some(email.clone()),
        }));
        self
    }

    pub fn reply_to(mut self, email: &str) -> Self {
        self.reply_to = Some(EmailAddress::new(email));
        self
    }

    pub fn build(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_v3_mail_body() {
        let mail = Mail::new("cleanup@example.com", MAIL_SUBJECT, "<p>hi</p>".to_string())
            .to(&["dev@example.com".to_string()])
            .cc(&["owner@example.com".to_string()])
            .reply_to("noreply@example.com")
            .build();

        assert_eq!(
            serde_json::to_value(&mail).unwrap(),
            json!({
                "personalizations": [{
                    "to": [{ "email": "dev@example.com" }],
                    "cc": [{ "email": "owner@example.com", "name": "owner@example.com" }]
                }],
                "from": { "email": "cleanup@example.com" },
                "reply_to": { "email": "noreply@example.com" },
                "subject": "Unattended GCP Projects Were Detected",
                "content": [{ "type": "text/html", "value": "<p>hi</p>" }]
            })
        );
    }

    #[test]
    fn empty_cc_is_omitted() {
        let mail = Mail::new("cleanup@example.com", MAIL_SUBJECT, String::new())
            .to(&["dev@example.com".to_string()])
            .cc(&[])
            .build();

        let value = serde_json::to_value(&mail).unwrap();
        assert!(value["personalizations"][0].get("cc").is_none());
        assert!(value.get("reply_to").is_none());
    }
}
