use serde::Serialize;

/// One week of classification counts from the analytics CSV.
/// Unparseable counts serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAnalytics {
    pub week: Option<i64>,
    pub week_start_date: String,
    pub human: Option<i64>,
    pub avatar: Option<i64>,
    pub other: Option<i64>,
    pub no_pic: Option<i64>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WeeklyAnalyticsResponse {
    pub data: Vec<WeeklyAnalytics>,
    pub timestamp: String,
}
