//! SeaORM adapters. Functions here return `DbErr`; repos map to `DomainError`.

pub mod accounts_sea;
pub mod bets_sea;
pub mod games_sea;
