use serde::{Deserialize, Serialize};

pub const ISSUE_SUMMARY: &str = "Unattended GCP Projects Were Detected";
pub const ISSUE_TYPE: &str = "Task";

/// Request body for `POST /rest/api/2/issue`.
#[derive(Debug, Serialize)]
pub struct CreateIssue {
    pub fields: IssueFields,
}

#[derive(Debug, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: String,
    #[serde(rename = "issuetype")]
    pub issue_type: IssueTypeRef,
    pub assignee: AssigneeRef,
}

#[derive(Debug, Serialize)]
pub struct ProjectRef {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRef {
    pub account_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

impl CreateIssue {
    pub fn task(project_id: &str, assignee_account_id: &str, description: String) -> Self {
        Self {
            fields: IssueFields {
                project: ProjectRef {
                    id: project_id.to_string(),
                },
                summary: ISSUE_SUMMARY.to_string(),
                description,
                issue_type: IssueTypeRef {
                    name: ISSUE_TYPE.to_string(),
                },
                assignee: AssigneeRef {
                    account_id: assignee_account_id.to_string(),
                },
            },
        }
    }
}
