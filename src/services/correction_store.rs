use crate::models::Correction;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory classification overrides keyed by user id (last write wins)
#[derive(Debug, Default)]
pub struct CorrectionStore {
    inner: RwLock<BTreeMap<String, Correction>>,
}

impl CorrectionStore {
    pub fn get(&self, user_id: &str) -> Option<Correction> {
        self.inner.read().ok()?.get(user_id).cloned()
    }

    /// Stores the correction and returns the number of corrected users.
    pub fn set(&self, user_id: String, correction: Correction) -> usize {
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(user_id, correction);
                map.len()
            }
            Err(_) => 0,
        }
    }

    #[cfg(test)]
    pub fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }

    /// Snapshot ordered by user id.
    pub fn all(&self) -> Vec<(String, Correction)> {
        self.inner
            .read()
            .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(to: &str) -> Correction {
        Correction {
            original_classification: Some("avatar".to_string()),
            corrected_classification: to.to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_last_write_wins() {
        let store = CorrectionStore::default();
        assert_eq!(store.set("u1".to_string(), correction("human")), 1);
        assert_eq!(store.set("u1".to_string(), correction("other")), 1);

        assert_eq!(store.get("u1").unwrap().corrected_classification, "other");
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_all_is_sorted_and_clear_empties() {
        let store = CorrectionStore::default();
        store.set("u2".to_string(), correction("human"));
        store.set("u1".to_string(), correction("human"));

        let ids: Vec<String> = store.all().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["u1", "u2"]);

        store.clear();
        assert!(store.all().is_empty());
        assert!(store.get("u1").is_none());
    }
}
