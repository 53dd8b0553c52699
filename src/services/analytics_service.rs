use crate::{models::WeeklyAnalytics, utils::error::AppError};
use std::io::ErrorKind;

/// Columns: week, week_start_date, human, avatar, other, no_pic.
/// Plain comma split; the file carries no quoted fields.
pub fn parse_weekly_analytics(csv: &str) -> Vec<WeeklyAnalytics> {
    csv.trim()
        .split('\n')
        .skip(1)
        .map(|line| {
            let values: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
            let value = |i: usize| values.get(i).copied().unwrap_or("");

            WeeklyAnalytics {
                week: parse_leading_int(value(0)),
                week_start_date: value(1).to_string(),
                human: parse_leading_int(value(2)),
                avatar: parse_leading_int(value(3)),
                other: parse_leading_int(value(4)),
                no_pic: parse_leading_int(value(5)),
            }
        })
        .collect()
}

/// Integer prefix of `raw` after leading whitespace (`"12 "` → 12, `"x"` → None).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let digits_start = usize::from(raw.starts_with('-') || raw.starts_with('+'));
    let digits_len = raw[digits_start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    raw[..digits_start + digits_len].parse().ok()
}

pub async fn load_weekly_analytics(path: &str) -> Result<Vec<WeeklyAnalytics>, AppError> {
    let csv = match tokio::fs::read_to_string(path).await {
        Ok(csv) => csv,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound("Analytics data not found".to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    Ok(parse_weekly_analytics(&csv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekly_rows() {
        let csv = "week,week_start_date,human,avatar,other,no_pic\n\
1,2026-01-05,120,30,4,50\n\
2,2026-01-12,125,28,n/a,47\n";

        let rows = parse_weekly_analytics(csv);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            WeeklyAnalytics {
                week: Some(1),
                week_start_date: "2026-01-05".to_string(),
                human: Some(120),
                avatar: Some(30),
                other: Some(4),
                no_pic: Some(50),
            }
        );
        assert_eq!(rows[1].other, None);
    }

    #[test]
    fn test_short_row_yields_nulls() {
        let rows = parse_weekly_analytics("header\n3,2026-01-19");
        assert_eq!(rows[0].week, Some(3));
        assert_eq!(rows[0].human, None);
        assert_eq!(rows[0].no_pic, None);
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(parse_leading_int(" 42"), Some(42));
        assert_eq!(parse_leading_int("7 weeks"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let err = load_weekly_analytics("/nonexistent/weekly_analytics.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("weekly_analytics_{}.csv", std::process::id()));
        std::fs::write(&path, "week,week_start_date,human,avatar,other,no_pic\n1,2026-01-05,1,2,3,4\n").unwrap();

        let rows = load_weekly_analytics(path.to_str().unwrap()).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].no_pic, Some(4));
    }
}
