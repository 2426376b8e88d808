//! Error types for configuration, persistence and result entry.
//!
//! Roster mutations themselves never fail loudly: they return `false` or a
//! report and log through `tracing`. These errors only surface at the edges.

use thiserror::Error;

use crate::types::{TeamId, ABSENT_TEAM_ID};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("team id {0} is not a positive integer")]
    InvalidTeamId(TeamId),

    #[error("team id {} is reserved for the absent team", ABSENT_TEAM_ID)]
    ReservedTeamId,

    #[error("team {0} is configured more than once")]
    DuplicateTeam(TeamId),

    #[error("member {name:?} appears more than once")]
    DuplicateMember { name: String },

    #[error("unknown team {0}")]
    UnknownTeam(TeamId),

    #[error("match {key} involves inactive team {team}")]
    InactiveTeamMatch { key: String, team: TeamId },

    #[error("team {0} cannot play itself")]
    SelfMatch(TeamId),

    #[error("invalid pair key {0:?}")]
    InvalidPairKey(String),

    #[error("invalid member source {0:?}")]
    InvalidSource(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
