use serde::{Deserialize, Serialize};

/// Label attached to a profile photo after the classify step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Human,
    Avatar,
    Other,
    Error,
    NoPic,
}

impl Classification {
    /// Maps a label returned by the classification backend.
    /// `animal` is surfaced as `other`; unknown labels yield `None`.
    pub fn from_backend_label(label: &str) -> Option<Self> {
        match label {
            "human" => Some(Classification::Human),
            "avatar" => Some(Classification::Avatar),
            "animal" | "other" => Some(Classification::Other),
            "error" => Some(Classification::Error),
            "no_pic" => Some(Classification::NoPic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Human => "human",
            Classification::Avatar => "avatar",
            Classification::Other => "other",
            Classification::Error => "error",
            Classification::NoPic => "no_pic",
        }
    }

    pub fn is_non_human(&self) -> bool {
        matches!(self, Classification::Avatar | Classification::Other)
    }
}

/// Request body accepted by the classification backend
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClassifyRequest {
    /// Image as a `data:<mime>;base64,...` URL
    pub image: Option<String>,
}

/// Successful classification backend answer
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClassifierResult {
    pub classification: String,
    /// Some backends answer `null` for labels without a score
    #[serde(default)]
    pub confidence: Option<f64>,
}
