use crate::config::db::{DbKind, RuntimeEnv};
use crate::config::server::AppConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: AppConfig,
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            env: RuntimeEnv::Prod,
            db_kind: None,
        }
    }
    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(kind) = self.db_kind {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(self.env, kind).await?;
            Ok(AppState::new(conn, self.config))
        } else {
            Ok(AppState::new_without_db(self.config))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
