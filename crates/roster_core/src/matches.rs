//! Match registry keyed by unordered team pairs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::error::{Result, RosterError};
use crate::types::TeamId;

/// Order-independent identifier of a two-team matchup.
///
/// The smaller id always comes first, so `PairKey::new(3, 1) == PairKey::new(1, 3)`.
/// Rendered as `"{low}-{high}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PairKey {
    low: TeamId,
    high: TeamId,
}

impl PairKey {
    pub fn new(a: TeamId, b: TeamId) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> TeamId {
        self.low
    }

    pub fn high(&self) -> TeamId {
        self.high
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.low == team || self.high == team
    }
}

/// Canonical pair key for two teams
pub fn pair_key(a: TeamId, b: TeamId) -> PairKey {
    PairKey::new(a, b)
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for PairKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RosterError::InvalidPairKey(s.to_string());
        let (a, b) = s.split_once('-').ok_or_else(invalid)?;
        let a: TeamId = a.trim().parse().map_err(|_| invalid())?;
        let b: TeamId = b.trim().parse().map_err(|_| invalid())?;
        if a == b {
            return Err(invalid());
        }
        Ok(PairKey::new(a, b))
    }
}

impl From<PairKey> for String {
    fn from(key: PairKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for PairKey {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Result of one match.
///
/// `team1`/`team2` keep the order the result was entered in, not sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub team1: TeamId,
    pub team2: TeamId,
    pub score_team1: u32,
    pub score_team2: u32,
    /// `None` for a draw
    pub winner: Option<TeamId>,
}

impl MatchRecord {
    pub fn new(team1: TeamId, team2: TeamId, score_team1: u32, score_team2: u32) -> Self {
        let winner = match score_team1.cmp(&score_team2) {
            std::cmp::Ordering::Greater => Some(team1),
            std::cmp::Ordering::Less => Some(team2),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            team1,
            team2,
            score_team1,
            score_team2,
            winner,
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team1 == team || self.team2 == team
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Scores as `(team's score, opponent's score)`
    pub fn scores_for(&self, team: TeamId) -> (u32, u32) {
        if self.team1 == team {
            (self.score_team1, self.score_team2)
        } else {
            (self.score_team2, self.score_team1)
        }
    }
}

/// All recorded results, one per team pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRegistry {
    matches: BTreeMap<PairKey, MatchRecord>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the result for a pair, keeping `team_a` as `team1`
    pub fn record_result(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        score_a: u32,
        score_b: u32,
    ) -> Result<&MatchRecord> {
        if team_a == team_b {
            return Err(RosterError::SelfMatch(team_a));
        }
        let key = pair_key(team_a, team_b);
        let record = MatchRecord::new(team_a, team_b, score_a, score_b);
        info!(%key, team_a, team_b, score_a, score_b, "recorded match result");
        self.matches.insert(key, record);
        Ok(&self.matches[&key])
    }

    pub fn lookup(&self, team_a: TeamId, team_b: TeamId) -> Option<&MatchRecord> {
        self.matches.get(&pair_key(team_a, team_b))
    }

    pub fn get(&self, key: &PairKey) -> Option<&MatchRecord> {
        self.matches.get(key)
    }

    pub fn remove(&mut self, team_a: TeamId, team_b: TeamId) -> Option<MatchRecord> {
        self.matches.remove(&pair_key(team_a, team_b))
    }

    /// Delete every record involving `team`; returns what was deleted
    pub fn cascade_deactivate(&mut self, team: TeamId) -> Vec<(PairKey, MatchRecord)> {
        let keys: Vec<PairKey> = self
            .matches
            .iter()
            .filter(|(_, record)| record.involves(team))
            .map(|(key, _)| *key)
            .collect();

        let removed: Vec<(PairKey, MatchRecord)> = keys
            .into_iter()
            .filter_map(|key| self.matches.remove(&key).map(|record| (key, record)))
            .collect();

        info!(team, count = removed.len(), "deleted matches of deactivated team");
        for (key, record) in &removed {
            info!(%key, team1 = record.team1, team2 = record.team2, "deleted match");
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &MatchRecord)> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
#[path = "matches_tests.rs"]
mod tests;
