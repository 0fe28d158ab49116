//! Background score simulator.
//!
//! One worker per process advances every in-progress game on a fixed
//! cadence. Each tick runs in its own transaction; a failed tick is rolled
//! back and logged, and the next tick starts from committed state.

use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::server::AppConfig;
use crate::domain::scoring::{advance, Advance};
use crate::errors::domain::DomainError;
use crate::repos::games::{self, GameScoreUpdate, GameStatus};

pub mod increments;

pub use increments::{IncrementSource, RandomIncrements, ScriptedIncrements};

/// What one tick changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub promoted: u64,
    pub advanced: usize,
    pub finished: usize,
}

/// Execute one simulator tick on `conn`.
///
/// Games live at the start of the tick are advanced; scheduled games whose
/// start time has passed are promoted but not scored until the next tick.
pub async fn run_tick<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    source: &mut dyn IncrementSource,
    now: OffsetDateTime,
) -> Result<TickReport, DomainError> {
    let live = games::find_by_status(conn, GameStatus::InProgress).await?;
    let promoted = games::promote_due(conn, now).await?;

    let mut report = TickReport {
        promoted,
        ..TickReport::default()
    };

    for game in live {
        let delta = source.next_delta();
        let outcome = advance(game.score(), delta);
        let score = outcome.score();
        let status = match outcome {
            Advance::InProgress(_) => GameStatus::InProgress,
            Advance::Finished { .. } => GameStatus::Finished,
        };

        let applied = games::update_scores(
            conn,
            GameScoreUpdate {
                id: game.id,
                score_team_1: score.team_1,
                score_team_2: score.team_2,
                status,
                result: outcome.winner(),
            },
        )
        .await?;

        if !applied {
            continue;
        }
        report.advanced += 1;

        if let Some(winner) = outcome.winner() {
            report.finished += 1;
            info!(
                game_id = game.id,
                score_team_1 = score.team_1,
                score_team_2 = score.team_2,
                winner = winner.as_str(),
                "game finished"
            );
        }
    }

    Ok(report)
}

/// Long-running worker that owns the increment source.
pub struct ScoreSimulator {
    db: DatabaseConnection,
    tick: Duration,
    source: Box<dyn IncrementSource>,
}

impl ScoreSimulator {
    pub fn new(db: DatabaseConnection, tick: Duration, source: Box<dyn IncrementSource>) -> Self {
        Self { db, tick, source }
    }

    /// Random increments, seeded from config when a seed is set
    pub fn from_config(db: DatabaseConnection, config: &AppConfig) -> Self {
        Self::new(
            db,
            config.tick_interval,
            Box::new(RandomIncrements::new(config.simulator_seed)),
        )
    }

    /// Run a single tick in its own transaction.
    pub async fn tick_once(&mut self) -> Result<TickReport, DomainError> {
        let txn = self.db.begin().await?;
        match run_tick(&txn, self.source.as_mut(), OffsetDateTime::now_utc()).await {
            Ok(report) => {
                txn.commit().await?;
                Ok(report)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "simulator rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Start the worker on the runtime. Call once per process.
    pub fn spawn(self) -> SimulatorHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let join = tokio::spawn(self.run(token));
        SimulatorHandle { cancel, join }
    }

    async fn run(mut self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(tick_ms = self.tick.as_millis() as u64, "score simulator started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    match self.tick_once().await {
                        Ok(report) => debug!(
                            promoted = report.promoted,
                            advanced = report.advanced,
                            finished = report.finished,
                            "simulator tick"
                        ),
                        Err(e) => warn!(error = %e, transient = e.is_transient(), "simulator tick failed; continuing"),
                    }
                }
            }
        }

        info!("score simulator stopped");
    }
}

/// Handle to the running simulator task
pub struct SimulatorHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Stop after the current tick and wait for the task to exit.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.join.await {
            warn!(error = %e, "score simulator task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
