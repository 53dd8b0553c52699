use crate::models::UserRecord;
use std::sync::RwLock;

/// Users from the most recent classify-all run, replaced wholesale on each run
#[derive(Debug, Default)]
pub struct ResultsStore {
    inner: RwLock<Option<Vec<UserRecord>>>,
}

impl ResultsStore {
    pub fn get(&self) -> Option<Vec<UserRecord>> {
        self.inner.read().ok()?.clone()
    }

    pub fn set(&self, users: Vec<UserRecord>) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(users);
        }
    }

    #[cfg(test)]
    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}
