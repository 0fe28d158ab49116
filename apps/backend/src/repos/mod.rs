//! Repository functions for the domain layer.

pub mod accounts;
pub mod bets;
pub mod games;
