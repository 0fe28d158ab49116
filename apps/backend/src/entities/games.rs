use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameStatus {
    #[sea_orm(string_value = "scheduled")]
    #[serde(rename = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "in_progress")]
    #[serde(rename = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "finished")]
    #[serde(rename = "finished")]
    Finished,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Finished => "finished",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == GameStatus::Finished
    }
}

impl std::str::FromStr for GameStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(GameStatus::Scheduled),
            "in_progress" => Ok(GameStatus::InProgress),
            "finished" => Ok(GameStatus::Finished),
            other => Err(format!(
                "unknown game status '{other}' (expected scheduled, in_progress or finished)"
            )),
        }
    }
}

/// Side of a game; used for results and bet picks
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Team {
    #[sea_orm(string_value = "team_1")]
    #[serde(rename = "team_1")]
    Team1,
    #[sea_orm(string_value = "team_2")]
    #[serde(rename = "team_2")]
    Team2,
}

impl Team {
    pub fn as_str(self) -> &'static str {
        match self {
            Team::Team1 => "team_1",
            Team::Team2 => "team_2",
        }
    }
}

impl std::str::FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team_1" => Ok(Team::Team1),
            "team_2" => Ok(Team::Team2),
            other => Err(format!("unknown team '{other}' (expected team_1 or team_2)")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "team_1")]
    pub team_1: String,
    #[sea_orm(column_name = "team_2")]
    pub team_2: String,
    #[sea_orm(column_name = "score_team_1")]
    pub score_team_1: i32,
    #[sea_orm(column_name = "score_team_2")]
    pub score_team_2: i32,
    pub status: GameStatus,
    pub result: Option<Team>,
    #[sea_orm(column_name = "start_time")]
    pub start_time: OffsetDateTime,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bets::Entity")]
    Bets,
}

impl Related<super::bets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
