use crate::{
    config::Config,
    utils::error::{ensure_success, AppError},
};
use base64::Engine;

const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Image bytes as served by storage
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl FetchedImage {
    /// `data:<content-type>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.content_type, encoded)
    }
}

/// Read-only access to the profile-image blob container and the mapping CSV
pub struct BlobStorage {
    http: reqwest::Client,
    mapping_csv_url: String,
    profile_images_url: String,
}

impl BlobStorage {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            mapping_csv_url: config.mapping_csv_url(),
            profile_images_url: config.profile_images_url(),
        }
    }

    pub fn profile_images_url(&self) -> &str {
        &self.profile_images_url
    }

    pub async fn fetch_mapping_csv(&self) -> Result<String, AppError> {
        log::info!("📄 Fetching mapping CSV from {}", self.mapping_csv_url);

        let response = self.http.get(&self.mapping_csv_url).send().await?;
        let response = ensure_success(response).await?;
        let csv = response.text().await?;

        log::info!("✅ Mapping CSV fetched ({} bytes)", csv.len());
        Ok(csv)
    }

    pub async fn fetch_image(&self, url: &str) -> Result<FetchedImage, AppError> {
        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
            .to_string();

        let bytes = response.bytes().await?.to_vec();

        Ok(FetchedImage {
            bytes,
            content_type,
        })
    }
}
