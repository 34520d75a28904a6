pub mod columns;
pub mod email;
pub mod ticket;

use crate::pubsub::payload::Recommendation;

/// Deep link to the recommendation in the Cloud console.
pub fn recommendation_link(recommendation: &Recommendation) -> String {
    format!(
        "https://console.cloud.google.com/home/recommendations/view-link/projects/{}/locations/global/recommenders/google.resourcemanager.projectUtilization.Recommender/recommendations/{};source=webSubtask?project={}&e=ViewLinkLaunch::ViewLinkEnabled",
        recommendation.project_number, recommendation.recommendation_id, recommendation.project_id
    )
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::pubsub::payload::{NotificationPayload, Recommendation};

    pub fn recommendation(project_id: &str, deleted: bool) -> Recommendation {
        Recommendation {
            project_id: project_id.to_string(),
            project_number: format!("{}-number", project_id),
            recommendation_id: format!("{}-rec", project_id),
            ttl_formatted_timestamp: "2022-08-01".to_string(),
            deleted: deleted.to_string(),
        }
    }

    pub fn payload(num_passes: &str, dry_run: bool, recommendations: Vec<Recommendation>) -> NotificationPayload {
        NotificationPayload {
            num_passes: num_passes.to_string(),
            dry_run: dry_run.to_string(),
            recommendations,
            escalation_contacts: serde_json::Value::Null,
            project_contacts: serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_parameterized_by_recommendation() {
        let link = recommendation_link(&fixtures::recommendation("idle", false));

        assert_eq!(
            link,
            "https://console.cloud.google.com/home/recommendations/view-link/projects/idle-number/locations/global/recommenders/google.resourcemanager.projectUtilization.Recommender/recommendations/idle-rec;source=webSubtask?project=idle&e=ViewLinkLaunch::ViewLinkEnabled"
        );
    }
}
