use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::require_db;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::GameId;
use crate::repos::games::Game;
use crate::services::games as games_service;
use crate::state::app_state::AppState;
use crate::ws::protocol::{GameSnapshot, ServerMsg};
use crate::ws::tracker::SessionSlot;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
/// Silent clients are dropped with `CloseCode::Away`; `Normal` is reserved
/// for a finished game.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

fn heartbeat_verdict(silent_for: Duration) -> Option<ws::CloseCode> {
    (silent_for > CLIENT_TIMEOUT).then_some(ws::CloseCode::Away)
}

/// GET /ws/game/{game_id}
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let db = require_db(&app_state)?.clone();
    let session = LiveGameSession::new(
        game_id.0,
        db,
        app_state.config.tick_interval,
        app_state.live_sessions().enter(),
    );
    ws::start(session, &req, stream)
}

/// Streams one game's state to one client until the game finishes.
pub struct LiveGameSession {
    conn_id: Uuid,
    game_id: i64,
    db: DatabaseConnection,
    poll_interval: Duration,

    last_heartbeat: Instant,
    poll_in_flight: bool,
    closing: bool,
    _slot: SessionSlot,
}

impl LiveGameSession {
    pub fn new(
        game_id: i64,
        db: DatabaseConnection,
        poll_interval: Duration,
        slot: SessionSlot,
    ) -> Self {
        Self {
            conn_id: Uuid::new_v4(),
            game_id,
            db,
            poll_interval,
            last_heartbeat: Instant::now(),
            poll_in_flight: false,
            closing: false,
            _slot: slot,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[LIVE] failed to serialize outbound message"),
        }
    }

    fn close_with(&mut self, ctx: &mut ws::WebsocketContext<Self>, code: ws::CloseCode) {
        self.closing = true;
        ctx.close(Some(ws::CloseReason::from(code)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if let Some(code) = heartbeat_verdict(actor.last_heartbeat.elapsed()) {
                warn!(
                    conn_id = %actor.conn_id,
                    game_id = actor.game_id,
                    "[LIVE] heartbeat timed out"
                );
                actor.close_with(ctx, code);
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Fetch the game once; at most one fetch is outstanding per session.
    fn poll(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        if self.poll_in_flight || self.closing {
            return;
        }
        self.poll_in_flight = true;

        let db = self.db.clone();
        let game_id = self.game_id;

        ctx.spawn(
            async move { games_service::get_game(&db, game_id).await }
                .into_actor(self)
                .map(|res, actor, ctx| {
                    actor.poll_in_flight = false;
                    actor.on_poll(res, ctx);
                }),
        );
    }

    fn on_poll(&mut self, res: Result<Game, DomainError>, ctx: &mut ws::WebsocketContext<Self>) {
        if self.closing {
            return;
        }
        match res {
            Ok(game) => {
                Self::send_json(ctx, &ServerMsg::Snapshot(GameSnapshot::from(&game)));
                if game.status.is_terminal() {
                    info!(
                        conn_id = %self.conn_id,
                        game_id = self.game_id,
                        "[LIVE] game finished; closing"
                    );
                    self.close_with(ctx, ws::CloseCode::Normal);
                }
            }
            Err(DomainError::NotFound(_, detail)) => {
                info!(
                    conn_id = %self.conn_id,
                    game_id = self.game_id,
                    "[LIVE] unknown game; closing"
                );
                Self::send_json(
                    ctx,
                    &ServerMsg::Error {
                        code: ErrorCode::GameNotFound,
                        message: detail,
                    },
                );
                self.close_with(ctx, ws::CloseCode::Policy);
            }
            Err(err) => {
                // Next poll retries from whatever is committed.
                warn!(
                    conn_id = %self.conn_id,
                    game_id = self.game_id,
                    error = %err,
                    transient = err.is_transient(),
                    "[LIVE] poll failed"
                );
            }
        }
    }
}

impl Actor for LiveGameSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            game_id = self.game_id,
            "[LIVE] session started"
        );

        self.start_heartbeat(ctx);
        self.poll(ctx);
        ctx.run_interval(self.poll_interval, |actor, ctx| actor.poll(ctx));
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            game_id = self.game_id,
            "[LIVE] session stopped"
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for LiveGameSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            // Push-only channel; inbound data only counts as liveness.
            Ok(ws::Message::Text(_))
            | Ok(ws::Message::Binary(_))
            | Ok(ws::Message::Continuation(_))
            | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Close(reason)) => {
                self.closing = true;
                ctx.close(reason);
                ctx.stop();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    game_id = self.game_id,
                    error = %err,
                    "[LIVE] protocol error"
                );
                self.close_with(ctx, ws::CloseCode::Error);
            }
        }
    }
}
