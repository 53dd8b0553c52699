use crate::{
    models::{
        Classification, MisclassificationEntry, MisclassifiedReport, NonHumanReport, NonHumanUser,
    },
    services::{correction_store::CorrectionStore, results_store::ResultsStore},
};

pub fn misclassified_report(corrections: &CorrectionStore) -> MisclassifiedReport {
    let misclassifications: Vec<MisclassificationEntry> = corrections
        .all()
        .into_iter()
        .map(|(user_id, correction)| MisclassificationEntry { user_id, correction })
        .collect();

    MisclassifiedReport {
        report: "misclassified".to_string(),
        total_misclassified: misclassifications.len(),
        misclassifications,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Users of the last classify-all run whose effective label is avatar or other.
/// A stored correction takes precedence over the classifier's label.
pub fn non_human_report(results: &ResultsStore, corrections: &CorrectionStore) -> NonHumanReport {
    let users: Vec<NonHumanUser> = results
        .get()
        .unwrap_or_default()
        .into_iter()
        .filter_map(|user| {
            let correction = corrections.get(&user.id);
            let (label, corrected) = match &correction {
                Some(c) => (c.corrected_classification.clone(), true),
                None => (user.classification?.as_str().to_string(), false),
            };

            let non_human = Classification::from_backend_label(&label)
                .map(|c| c.is_non_human())
                .unwrap_or(false);
            if !non_human {
                return None;
            }

            Some(NonHumanUser {
                id: user.id,
                display_name: user.display_name,
                user_principal_name: user.user_principal_name,
                photo: user.photo,
                classification: label,
                confidence: if corrected { None } else { user.confidence },
                corrected,
            })
        })
        .collect();

    NonHumanReport {
        report: "non-human".to_string(),
        total_count: users.len(),
        users,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Correction, UserRecord};

    fn user(id: &str, classification: Option<Classification>) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            user_principal_name: format!("{}@x.com", id),
            image_type: "avatar".to_string(),
            image_path: format!("photos/{}.jpg", id),
            photo: Some(format!("https://store/profile-images/{}.jpg", id)),
            has_photo: true,
            classification,
            confidence: Some(0.9),
        }
    }

    fn correction(to: &str) -> Correction {
        Correction {
            original_classification: None,
            corrected_classification: to.to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_non_human_empty_before_any_run() {
        let report = non_human_report(&ResultsStore::default(), &CorrectionStore::default());
        assert_eq!(report.report, "non-human");
        assert_eq!(report.total_count, 0);
        assert!(report.users.is_empty());
    }

    #[test]
    fn test_non_human_applies_corrections() {
        let results = ResultsStore::default();
        results.set(vec![
            user("a", Some(Classification::Avatar)),
            user("b", Some(Classification::Human)),
            user("c", Some(Classification::Other)),
            user("d", Some(Classification::Error)),
        ]);

        let corrections = CorrectionStore::default();
        corrections.set("a".to_string(), correction("human"));
        corrections.set("b".to_string(), correction("avatar"));

        let report = non_human_report(&results, &corrections);
        let ids: Vec<&str> = report.users.iter().map(|u| u.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "c"]);
        assert!(report.users[0].corrected);
        assert_eq!(report.users[0].confidence, None);
        assert!(!report.users[1].corrected);
        assert_eq!(report.users[1].classification, "other");

        results.clear();
        assert_eq!(non_human_report(&results, &corrections).total_count, 0);
    }

    #[test]
    fn test_misclassified_report() {
        let corrections = CorrectionStore::default();
        corrections.set("u1".to_string(), correction("human"));

        let report = misclassified_report(&corrections);
        assert_eq!(report.report, "misclassified");
        assert_eq!(report.total_misclassified, 1);
        assert_eq!(report.misclassifications[0].user_id, "u1");
    }
}
