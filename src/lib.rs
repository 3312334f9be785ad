pub mod config;
pub mod data;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::data::QuizPool;
use crate::error::Result;
use crate::services::{
    api_service::ApiService, attempt_service::AttemptService, cache_service::CacheService,
    preferences_service::PreferencesService, quiz_service::QuizService,
    session_service::SessionService, support_service::SupportService,
};
use crate::storage::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub quiz_service: QuizService,
    pub attempt_service: AttemptService,
    pub cache_service: CacheService,
    pub preferences_service: PreferencesService,
    pub session_service: SessionService,
    pub api_service: ApiService,
    pub support_service: SupportService,
}

impl AppState {
    /// Validates the built-in quiz pool and wires every service to `store`.
    pub fn new(config: &Config, store: SharedStore) -> Result<Self> {
        let pool = Arc::new(QuizPool::builtin()?);
        let quiz_service = QuizService::new(pool);
        let attempt_service = AttemptService::new(store.clone(), quiz_service.clone());
        let cache_service = CacheService::new(store.clone());
        let preferences_service = PreferencesService::new(store.clone());
        let session_service = SessionService::new(store.clone());

        let api_service = ApiService::new(
            config.api_base_url.clone(),
            config.api_timeout,
            session_service.clone(),
        )?;
        let support_service =
            SupportService::new(config.support_base_url.clone(), config.api_timeout)?;

        Ok(Self {
            store,
            quiz_service,
            attempt_service,
            cache_service,
            preferences_service,
            session_service,
            api_service,
            support_service,
        })
    }
}
