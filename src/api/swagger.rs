use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile Relay API",
        version = "0.1.0",
        description = "Relay between the profile review UI and Microsoft Graph, Azure Blob Storage and the photo classification backend.",
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::health::backend_health,
        crate::api::metrics::get_metrics,

        // Users
        crate::api::users::get_user_count,
        crate::api::users::get_profiles,

        // Classification
        crate::api::classify::classify_all_profiles,
        crate::api::classify::classify_image,

        // Corrections & Reports
        crate::api::corrections::save_correction,
        crate::api::reports::get_misclassified_report,
        crate::api::reports::get_non_human_report,

        // Analytics & Images
        crate::api::analytics::get_weekly_analytics,
        crate::api::proxy::proxy_image,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
            crate::api::proxy::ProxyImageResponse,
            crate::models::UserRecord,
            crate::models::Classification,
            crate::models::ProfilesResponse,
            crate::models::ClassifiedProfilesResponse,
            crate::models::UserCountResponse,
            crate::models::ClassifyRequest,
            crate::models::ClassifierResult,
            crate::models::CorrectionRequest,
            crate::models::CorrectionSavedResponse,
            crate::models::Correction,
            crate::models::MisclassificationEntry,
            crate::models::MisclassifiedReport,
            crate::models::NonHumanUser,
            crate::models::NonHumanReport,
            crate::models::WeeklyAnalytics,
            crate::models::WeeklyAnalyticsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Relay liveness, backend health and counters."),
        (name = "Users", description = "Directory user count (Microsoft Graph) and profile mapping (Blob Storage)."),
        (name = "Classification", description = "Profile photo classification through the backend service."),
        (name = "Corrections", description = "Manual overrides of assigned classifications, kept in memory."),
        (name = "Reports", description = "Misclassification and non-human profile reports."),
        (name = "Analytics", description = "Weekly classification counts."),
        (name = "Images", description = "Server-side image fetch returning data URLs."),
    )
)]
pub struct ApiDoc;
