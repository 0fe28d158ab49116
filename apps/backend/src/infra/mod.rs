//! Wiring between configuration and running resources: pool setup and
//! migrations, `DbErr` classification, and `AppState` assembly.

pub mod db;
pub mod db_errors;
pub mod state;
