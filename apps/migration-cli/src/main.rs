//! `migration` binary: applies schema changes to the sportsbook database.

use std::process::ExitCode;

use backend::config::db::{DbKind, RuntimeEnv};
use backend::infra::db::orchestrate_migration;
use clap::{Parser, ValueEnum};
use migration::MigrationCommand;
use tracing::{error, info};

/// Which `.env`-style settings the connection uses
#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Prod,
    Test,
}

impl From<Profile> for RuntimeEnv {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Prod => RuntimeEnv::Prod,
            Profile::Test => RuntimeEnv::Test,
        }
    }
}

/// Persistent backends only; an in-memory database would vanish on exit.
#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    Postgres,
    SqliteFile,
}

impl From<Backend> for DbKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Postgres => DbKind::Postgres,
            Backend::SqliteFile => DbKind::SqliteFile,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration", about = "Apply sportsbook schema migrations")]
struct Cli {
    /// up | down | fresh | reset | refresh | status
    #[arg(value_parser = parse_command)]
    command: MigrationCommand,

    #[arg(short, long, value_enum, default_value_t = Profile::Test)]
    env: Profile,

    #[arg(short, long, value_enum, default_value_t = Backend::Postgres)]
    db: Backend,
}

fn parse_command(raw: &str) -> Result<MigrationCommand, String> {
    raw.parse().map_err(|e| format!("{e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,sqlx=warn")
        .init();

    let cli = Cli::parse();
    let command = cli.command;
    info!(?command, "running migration");

    match orchestrate_migration(cli.env.into(), cli.db.into(), command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "migration failed");
            ExitCode::FAILURE
        }
    }
}
