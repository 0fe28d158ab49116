//! Domain services: validation and orchestration over repos.

pub mod accounts;
pub mod bets;
pub mod games;
