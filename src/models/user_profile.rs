use serde::{Deserialize, Serialize};
use super::Classification;

/// One row of the mapping CSV, reshaped for the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub display_name: String,
    pub user_principal_name: String,
    pub image_type: String,
    /// Storage-relative path, kept for photo derivation only
    #[serde(skip)]
    pub image_path: String,
    pub photo: Option<String>,
    pub has_photo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl UserRecord {
    pub fn mark_failed(&mut self) {
        self.classification = Some(Classification::Error);
        self.confidence = Some(0.0);
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesResponse {
    pub users: Vec<UserRecord>,
    pub total: usize,
    pub with_photos: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedProfilesResponse {
    pub users: Vec<UserRecord>,
    pub total: usize,
    pub classified: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserCountResponse {
    pub count: u64,
    pub timestamp: String,
}
