use crate::error::{Error, Result};
use crate::models::preferences::Session;
use crate::services::cache_service::{CacheService, ANALYSIS_PATTERN, STATS_PATTERN};
use crate::storage::{keys, SharedStore};

#[derive(Clone)]
pub struct SessionService {
    store: SharedStore,
    cache: CacheService,
}

impl SessionService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            cache: CacheService::new(store.clone()),
            store,
        }
    }

    pub fn current(&self) -> Result<Option<Session>> {
        match self.store.get(keys::SESSION)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.current()?.map(|s| s.access_token))
    }

    pub fn sign_in(&self, session: Session) -> Result<()> {
        if session.access_token.trim().is_empty() {
            return Err(Error::InvalidArgument("Access token is empty".to_string()));
        }
        self.store.set(keys::SESSION, &serde_json::to_string(&session)?)?;
        tracing::info!(user_id = %session.user_id, "Session stored");
        Ok(())
    }

    /// Drops the session along with analyses and stats cached for that user.
    pub fn sign_out(&self) -> Result<()> {
        self.store.remove(keys::SESSION)?;
        self.cache.clear_matching(ANALYSIS_PATTERN)?;
        self.cache.clear_matching(STATS_PATTERN)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn session() -> Session {
        Session {
            user_id: "u-1".into(),
            email: "hero@example.com".into(),
            access_token: "tok".into(),
        }
    }

    #[test]
    fn sign_in_then_out() {
        let store = Arc::new(MemoryStore::new());
        let svc = SessionService::new(store.clone());
        assert_eq!(svc.current().unwrap(), None);

        svc.sign_in(session()).unwrap();
        assert_eq!(svc.access_token().unwrap().as_deref(), Some("tok"));

        store.set("analysis_hand_3", "{}").unwrap();
        store.set("user_stats", "{}").unwrap();
        store.set(keys::USER_PREFERENCES, "{}").unwrap();
        svc.sign_out().unwrap();

        assert_eq!(svc.current().unwrap(), None);
        let keys_left: Vec<String> = store.entries().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys_left, vec![keys::USER_PREFERENCES.to_string()]);
    }

    #[test]
    fn empty_token_is_rejected() {
        let svc = SessionService::new(Arc::new(MemoryStore::new()));
        let mut s = session();
        s.access_token = " ".into();
        assert!(matches!(svc.sign_in(s), Err(Error::InvalidArgument(_))));
    }
}
