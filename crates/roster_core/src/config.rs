//! Initial roster configuration.
//!
//! Loaded once at session start. The snapshot is never mutated: it is the
//! universe from which unassigned members are derived.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::types::{Team, TeamId, ABSENT_TEAM_ID};

/// Roster snapshot: `{ teams = [{ id, members = [..] }, ..] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub teams: Vec<TeamConfig>,
}

/// One configured team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub id: TeamId,
    #[serde(default)]
    pub members: Vec<String>,
}

impl RosterConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Reject configurations that would break roster invariants from the start
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for team in &self.teams {
            if team.id == 0 {
                return Err(RosterError::InvalidTeamId(team.id));
            }
            if team.id == ABSENT_TEAM_ID {
                return Err(RosterError::ReservedTeamId);
            }
            if !ids.insert(team.id) {
                return Err(RosterError::DuplicateTeam(team.id));
            }
            for name in &team.members {
                if !names.insert(name.as_str()) {
                    return Err(RosterError::DuplicateMember { name: name.clone() });
                }
            }
        }
        Ok(())
    }

    /// Every member name in configuration order
    pub fn all_members(&self) -> impl Iterator<Item = &str> {
        self.teams
            .iter()
            .flat_map(|team| team.members.iter().map(String::as_str))
    }

    /// Fresh, all-active teams built from this snapshot
    pub fn build_teams(&self) -> Vec<Team> {
        self.teams
            .iter()
            .map(|team| Team::new(team.id, team.members.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
