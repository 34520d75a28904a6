/// Value substituted for a missing environment variable. It is passed on as
/// if it were valid, so the delivery call fails and gets logged instead.
pub fn placeholder(name: &str) -> String {
    format!("environment variable {} is not set.", name)
}

pub fn env_or_placeholder<F>(lookup: &F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).unwrap_or_else(|| placeholder(name))
}

/// Secret versions may end with a newline, which breaks auth headers.
pub fn secret_or_placeholder<F>(lookup: &F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_or_placeholder(lookup, name).trim_end_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "PRESENT" => Some("value".to_string()),
            "secret-key" => Some("s3cr3t\n\n".to_string()),
            _ => None,
        }
    }

    #[test]
    fn missing_variable_becomes_placeholder() {
        assert_eq!(env_or_placeholder(&lookup, "PRESENT"), "value");
        assert_eq!(
            env_or_placeholder(&lookup, "JIRA_PROJECT_ID"),
            "environment variable JIRA_PROJECT_ID is not set."
        );
    }

    #[test]
    fn secrets_lose_trailing_newlines() {
        assert_eq!(secret_or_placeholder(&lookup, "secret-key"), "s3cr3t");
        assert_eq!(
            secret_or_placeholder(&lookup, "sendgrid-key"),
            "environment variable sendgrid-key is not set."
        );
    }
}
