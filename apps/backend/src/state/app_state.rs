use sea_orm::DatabaseConnection;

use crate::config::server::AppConfig;
use crate::ws::tracker::LiveSessions;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Runtime settings (tick interval, simulator switches)
    pub config: AppConfig,
    live_sessions: LiveSessions,
}

impl AppState {
    /// Create a new AppState with the given database connection and config
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db: Some(db),
            config,
            live_sessions: LiveSessions::default(),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db(config: AppConfig) -> Self {
        Self {
            db: None,
            config,
            live_sessions: LiveSessions::default(),
        }
    }

    /// Borrow the database connection, if one is configured
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Live channel sessions opened through this state
    pub fn live_sessions(&self) -> &LiveSessions {
        &self.live_sessions
    }
}
