//! Backend test support utilities
//!
//! Shared by the sportsbook unit and integration tests: quiet logging
//! bootstrap, problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
