//! Live update channel: one websocket session per subscriber, polling one game.

pub mod protocol;
pub mod session;
pub mod tracker;

use actix_web::web;

pub use session::{upgrade, LiveGameSession};
pub use tracker::{LiveSessions, SessionSlot};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/ws/game/{game_id}", "/ws/game/{game_id}/"])
            .route(web::get().to(upgrade)),
    );
}
