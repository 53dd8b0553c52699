use crate::{
    models::{Classification, ClassifiedProfilesResponse, ProfilesResponse, UserRecord},
    services::{
        classifier_service::ClassifierClient,
        mapping_parser::{self, has_unexpected_depth},
        storage_service::BlobStorage,
    },
    utils::error::AppError,
};

/// Parses the mapping CSV, flagging image paths that break the
/// `<container>/<filename>` assumption of photo derivation.
pub fn parse_profiles(csv: &str, profile_images_url: &str) -> Vec<UserRecord> {
    let users = mapping_parser::parse_mapping_csv(csv, profile_images_url);

    let unexpected = users
        .iter()
        .filter(|u| u.has_photo && has_unexpected_depth(&u.image_path))
        .count();
    if unexpected > 0 {
        log::warn!(
            "⚠️  {} mapping rows have image paths without exactly two segments; their photo URLs are likely wrong",
            unexpected
        );
    }

    users
}

/// GET /api/users/profiles
pub async fn load_profiles(storage: &BlobStorage) -> Result<ProfilesResponse, AppError> {
    let csv = storage.fetch_mapping_csv().await?;
    let users = parse_profiles(&csv, storage.profile_images_url());

    let with_photos = users.iter().filter(|u| u.has_photo).count();
    log::info!("✅ Loaded {} user profiles ({} with photos)", users.len(), with_photos);

    Ok(ProfilesResponse {
        total: users.len(),
        with_photos,
        users,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// POST /api/classify/all-profiles
///
/// Records are classified one after another. A failure on one record marks it
/// `error` with confidence 0 and the loop moves on; only the CSV fetch can fail
/// the whole call.
pub async fn classify_all(
    storage: &BlobStorage,
    classifier: &ClassifierClient,
) -> Result<ClassifiedProfilesResponse, AppError> {
    let csv = storage.fetch_mapping_csv().await?;
    let mut users = parse_profiles(&csv, storage.profile_images_url());

    let classified = users.iter().filter(|u| u.has_photo).count();
    log::info!("🔍 Classifying {} of {} profiles", classified, users.len());

    for user in users.iter_mut() {
        if user.has_photo {
            classify_user(storage, classifier, user).await;
        } else {
            user.classification = Some(Classification::NoPic);
        }
    }

    Ok(ClassifiedProfilesResponse {
        total: users.len(),
        classified,
        users,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn classify_user(storage: &BlobStorage, classifier: &ClassifierClient, user: &mut UserRecord) {
    let Some(photo) = user.photo.clone() else {
        return;
    };

    log::info!("[CLASSIFY] Processing {} ({})", user.display_name, photo);

    let image = match storage.fetch_image(&photo).await {
        Ok(image) => image,
        Err(e) => {
            log::error!("[CLASSIFY] Failed to fetch image for {}: {}", user.display_name, e);
            user.mark_failed();
            return;
        }
    };

    log::debug!("[CLASSIFY] Got image ({} bytes) for {}", image.bytes.len(), user.display_name);

    match classifier.classify(&image.to_data_url()).await {
        Ok(result) => match Classification::from_backend_label(&result.classification) {
            Some(label) => {
                let confidence = result.confidence.unwrap_or(0.0);
                log::info!(
                    "[CLASSIFY] Result for {}: {} ({:.3})",
                    user.display_name,
                    label.as_str(),
                    confidence
                );
                user.classification = Some(label);
                user.confidence = Some(confidence);
            }
            None => {
                log::warn!(
                    "[CLASSIFY] Unknown label '{}' for {}",
                    result.classification,
                    user.display_name
                );
                user.mark_failed();
            }
        },
        Err(e) => {
            log::error!("[CLASSIFY] Backend error for {}: {}", user.display_name, e);
            user.mark_failed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const CSV: &str = "user_id,display_name,user_principal_name,image_type,image_path\n\
u1,\"Doe, Jane\",jane@x.com,avatar,photos/jane.jpg\n\
u2,John Roe,john@x.com,no_pic,\n\
u3,Rex,rex@x.com,other,photos/rex.png\n\
u4,Missing,missing@x.com,human,photos/missing.jpg\n";

    fn clients(server: &mockito::ServerGuard) -> (BlobStorage, ClassifierClient) {
        let config = Config::for_upstream(&server.url());
        let http = reqwest::Client::new();
        (
            BlobStorage::new(http.clone(), &config),
            ClassifierClient::new(http, config.backend_url.clone()),
        )
    }

    #[tokio::test]
    async fn test_load_profiles_counts() {
        let mut server = mockito::Server::new_async().await;
        let _csv = server
            .mock("GET", "/mappings/profile_image_mapping.csv")
            .with_status(200)
            .with_body(CSV)
            .create_async()
            .await;

        let (storage, _) = clients(&server);
        let response = load_profiles(&storage).await.unwrap();

        assert_eq!(response.total, 4);
        assert_eq!(response.with_photos, 3);
        assert_eq!(
            response.users[0].photo.as_deref(),
            Some(format!("{}/profile-images/jane.jpg", server.url()).as_str())
        );
    }

    #[tokio::test]
    async fn test_classify_all_partial_failure() {
        let mut server = mockito::Server::new_async().await;
        let _csv = server
            .mock("GET", "/mappings/profile_image_mapping.csv")
            .with_status(200)
            .with_body(CSV)
            .create_async()
            .await;
        let _jane = server
            .mock("GET", "/profile-images/jane.jpg")
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body("jane")
            .create_async()
            .await;
        let _rex = server
            .mock("GET", "/profile-images/rex.png")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body("rex")
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/profile-images/missing.jpg")
            .with_status(404)
            .create_async()
            .await;
        let _classify_jane = server
            .mock("POST", "/classify")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "image": "data:image/jpeg;base64,amFuZQ=="
            })))
            .with_status(200)
            .with_body(r#"{"classification":"avatar","confidence":0.8}"#)
            .create_async()
            .await;
        let _classify_rex = server
            .mock("POST", "/classify")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "image": "data:image/png;base64,cmV4"
            })))
            .with_status(200)
            .with_body(r#"{"classification":"animal","confidence":0.7}"#)
            .create_async()
            .await;

        let (storage, classifier) = clients(&server);
        let response = classify_all(&storage, &classifier).await.unwrap();

        assert_eq!(response.total, 4);
        assert_eq!(response.classified, 3);

        let users = &response.users;
        assert_eq!(users[0].classification, Some(Classification::Avatar));
        assert_eq!(users[0].confidence, Some(0.8));
        assert_eq!(users[1].classification, Some(Classification::NoPic));
        assert_eq!(users[1].confidence, None);
        assert_eq!(users[2].classification, Some(Classification::Other));
        assert_eq!(users[3].classification, Some(Classification::Error));
        assert_eq!(users[3].confidence, Some(0.0));
    }

    #[tokio::test]
    async fn test_null_confidence_keeps_label() {
        let mut server = mockito::Server::new_async().await;
        let _csv = server
            .mock("GET", "/mappings/profile_image_mapping.csv")
            .with_status(200)
            .with_body("h\nu1,A,a@x.com,human,photos/a.jpg\n")
            .create_async()
            .await;
        let _img = server
            .mock("GET", "/profile-images/a.jpg")
            .with_status(200)
            .with_body("a")
            .create_async()
            .await;
        let _classify = server
            .mock("POST", "/classify")
            .with_status(200)
            .with_body(r#"{"classification":"human","confidence":null}"#)
            .create_async()
            .await;

        let (storage, classifier) = clients(&server);
        let response = classify_all(&storage, &classifier).await.unwrap();

        assert_eq!(response.classified, 1);
        assert_eq!(response.users[0].classification, Some(Classification::Human));
        assert_eq!(response.users[0].confidence, Some(0.0));
    }

    #[tokio::test]
    async fn test_classifier_error_marks_record() {
        let mut server = mockito::Server::new_async().await;
        let _csv = server
            .mock("GET", "/mappings/profile_image_mapping.csv")
            .with_status(200)
            .with_body("h\nu1,A,a@x.com,human,photos/a.jpg\n")
            .create_async()
            .await;
        let _img = server
            .mock("GET", "/profile-images/a.jpg")
            .with_status(200)
            .with_body("a")
            .create_async()
            .await;
        let _classify = server
            .mock("POST", "/classify")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let (storage, classifier) = clients(&server);
        let response = classify_all(&storage, &classifier).await.unwrap();

        assert_eq!(response.users[0].classification, Some(Classification::Error));
        assert_eq!(response.users[0].confidence, Some(0.0));
    }

    #[tokio::test]
    async fn test_classify_all_fails_without_csv() {
        let mut server = mockito::Server::new_async().await;
        let _csv = server
            .mock("GET", "/mappings/profile_image_mapping.csv")
            .with_status(403)
            .with_body("AuthorizationFailure")
            .create_async()
            .await;

        let (storage, classifier) = clients(&server);
        let err = classify_all(&storage, &classifier).await.unwrap_err();
        assert_eq!(err.upstream_status(), Some(403));
    }
}
