use serde::{Deserialize, Serialize};

/// POST /api/corrections body
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRequest {
    pub user_id: Option<String>,
    pub original_classification: Option<String>,
    pub corrected_classification: Option<String>,
}

/// A user-submitted override of an assigned classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    pub original_classification: Option<String>,
    pub corrected_classification: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CorrectionSavedResponse {
    pub success: bool,
    pub corrections: usize,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MisclassificationEntry {
    pub user_id: String,
    #[serde(flatten)]
    pub correction: Correction,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MisclassifiedReport {
    pub report: String,
    pub misclassifications: Vec<MisclassificationEntry>,
    pub total_misclassified: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NonHumanUser {
    pub id: String,
    pub display_name: String,
    pub user_principal_name: String,
    pub photo: Option<String>,
    pub classification: String,
    pub confidence: Option<f64>,
    pub corrected: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NonHumanReport {
    pub report: String,
    pub users: Vec<NonHumanUser>,
    pub total_count: usize,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misclassification_entry_is_flat() {
        let entry = MisclassificationEntry {
            user_id: "u1".to_string(),
            correction: Correction {
                original_classification: Some("avatar".to_string()),
                corrected_classification: "human".to_string(),
                timestamp: "2026-01-01T00:00:00Z".to_string(),
            },
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["originalClassification"], "avatar");
        assert_eq!(value["correctedClassification"], "human");
    }
}
