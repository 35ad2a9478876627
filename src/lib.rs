pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::database::store::{ApplicationStore, PgApplicationStore};
use crate::services::application_service::ApplicationService;

#[derive(Clone)]
pub struct AppState {
    pub application_service: ApplicationService,
    pub environment: String,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        Self::with_store(
            Arc::new(PgApplicationStore::new(pool)),
            config.environment.clone(),
        )
    }

    pub fn with_store(store: Arc<dyn ApplicationStore>, environment: String) -> Self {
        Self {
            application_service: ApplicationService::new(store),
            environment,
        }
    }
}
