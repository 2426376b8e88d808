//! Core roster types: team ids, member sources, teams and the absent bucket.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Team identifier (small positive integer, stable for the session)
pub type TeamId = u32;

/// Fixed id of the absent pseudo-team
pub const ABSENT_TEAM_ID: TeamId = 6;

/// Where a member currently lives.
///
/// `Unassigned` has no backing list: it is derived from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    Team(TeamId),
    Absent,
    Unassigned,
}

impl Source {
    /// Map a raw team id to a source, folding the absent pseudo-team id into `Absent`.
    pub fn from_team_id(id: TeamId) -> Self {
        if id == ABSENT_TEAM_ID {
            Source::Absent
        } else {
            Source::Team(id)
        }
    }

    /// Label shown next to a selected member ("currently: ...")
    pub fn label(&self) -> String {
        match self {
            Source::Team(id) => format!("team {}", id),
            Source::Absent => "absent".to_string(),
            Source::Unassigned => "unassigned".to_string(),
        }
    }

    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            Source::Team(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Team(id) => write!(f, "{}", id),
            Source::Absent => write!(f, "absent"),
            Source::Unassigned => write!(f, "unassigned"),
        }
    }
}

impl FromStr for Source {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absent" => Ok(Source::Absent),
            "unassigned" => Ok(Source::Unassigned),
            other => other
                .parse::<TeamId>()
                .map(Source::from_team_id)
                .map_err(|_| RosterError::InvalidSource(s.to_string())),
        }
    }
}

fn default_active() -> bool {
    true
}

/// A numbered team and its ordered member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub members: Vec<String>,
    /// Whether the team counts toward the match table and standings
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Team {
    pub fn new(id: TeamId, members: Vec<String>) -> Self {
        Self {
            id,
            members,
            active: true,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Append a member unless already present. Returns true if added.
    pub fn add_member(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.members.push(name.to_string());
        true
    }

    /// Remove a member, keeping the order of the rest. Returns true if removed.
    pub fn remove_member(&mut self, name: &str) -> bool {
        match self.members.iter().position(|m| m == name) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// The absent pseudo-team.
///
/// Never part of the match table, but has its own participation flag for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsentBucket {
    pub members: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Default for AbsentBucket {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            active: true,
        }
    }
}

impl AbsentBucket {
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn add_member(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.members.push(name.to_string());
        true
    }

    pub(crate) fn remove_member(&mut self, name: &str) -> bool {
        match self.members.iter().position(|m| m == name) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }
}
