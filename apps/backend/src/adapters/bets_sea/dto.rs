//! DTOs for bets_sea adapter.

use crate::entities::games::Team;

/// DTO for recording a placed bet.
#[derive(Debug, Clone)]
pub struct BetCreate {
    pub account_id: i64,
    pub game_id: i64,
    pub team: Team,
    pub points: f64,
}
