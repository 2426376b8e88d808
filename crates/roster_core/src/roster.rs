//! Roster store: teams, the absent bucket and member mutation primitives.
//!
//! Every mutation keeps one invariant: a member name appears in at most one of
//! {any team's member list, the absent bucket}. Unassigned members have no
//! backing container and are derived on demand from the configuration.

use tracing::{info, warn};

use crate::config::RosterConfig;
use crate::types::{AbsentBucket, Source, Team, TeamId, ABSENT_TEAM_ID};

/// Current teams and absent bucket for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStore {
    teams: Vec<Team>,
    absent: AbsentBucket,
}

impl RosterStore {
    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            teams: config.build_teams(),
            absent: AbsentBucket::default(),
        }
    }

    /// Rebuild from previously saved parts
    pub fn from_parts(teams: Vec<Team>, absent: AbsentBucket) -> Self {
        Self { teams, absent }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn absent(&self) -> &AbsentBucket {
        &self.absent
    }

    /// Participation flag of a team or of the absent pseudo-team. Unknown ids are inactive.
    pub fn is_team_active(&self, id: TeamId) -> bool {
        if id == ABSENT_TEAM_ID {
            return self.absent.active;
        }
        self.team(id).map(|t| t.active).unwrap_or(false)
    }

    pub fn active_teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(|t| t.active)
    }

    /// Find the container currently holding `name`
    pub fn locate(&self, name: &str) -> Option<Source> {
        if let Some(team) = self.teams.iter().find(|t| t.contains(name)) {
            return Some(Source::Team(team.id));
        }
        if self.absent.contains(name) {
            return Some(Source::Absent);
        }
        None
    }

    /// Add `name` to a team, skipping it if already there.
    ///
    /// A name held by any other container is left where it is, so the
    /// uniqueness invariant can never be broken by an add.
    pub(crate) fn place_in_team(&mut self, name: &str, team_id: TeamId) -> bool {
        match self.locate(name) {
            Some(Source::Team(id)) if id == team_id => return true,
            Some(other) => {
                warn!(member = name, held_by = %other, team = team_id, "member already placed elsewhere, skipping");
                return false;
            }
            None => {}
        }
        match self.team_mut(team_id) {
            Some(team) => team.add_member(name),
            None => {
                warn!(team = team_id, "target team not found");
                false
            }
        }
    }

    /// Remove `name` from one team's list. Returns true if it was there.
    pub(crate) fn remove_from_team(&mut self, name: &str, team_id: TeamId) -> bool {
        self.team_mut(team_id)
            .map(|team| team.remove_member(name))
            .unwrap_or(false)
    }

    /// Move a member from `from` into team `to`.
    ///
    /// When `from` is a team and the member is not in it, nothing changes.
    pub fn move_member(&mut self, name: &str, from: Source, to: TeamId) -> bool {
        match from {
            Source::Team(id) if id == to => {
                return self.team(to).map(|t| t.contains(name)).unwrap_or(false);
            }
            Source::Team(id) => {
                if !self.remove_from_team(name, id) {
                    warn!(member = name, team = id, "member not found in source team");
                    return false;
                }
            }
            Source::Absent => {
                self.absent.remove_member(name);
            }
            Source::Unassigned => {}
        }
        let placed = self.place_in_team(name, to);
        if placed {
            info!(member = name, from = %from, to, "moved member");
        }
        placed
    }

    /// Pull `name` out of whichever team holds it and put it in the absent bucket
    pub fn mark_absent(&mut self, name: &str) -> bool {
        let Some(team) = self.teams.iter_mut().find(|t| t.contains(name)) else {
            warn!(member = name, "cannot mark absent: member is not in any team");
            return false;
        };
        let team_id = team.id;
        team.remove_member(name);
        self.absent.add_member(name);
        info!(member = name, team = team_id, "marked member absent");
        true
    }

    /// Take `name` out of the absent bucket. The caller chooses where it goes next.
    pub fn return_from_absent(&mut self, name: &str) -> bool {
        let removed = self.absent.remove_member(name);
        if removed {
            info!(member = name, "returned member from absent");
        } else {
            warn!(member = name, "member is not absent");
        }
        removed
    }

    /// Flip participation of a team (or of the absent pseudo-team).
    ///
    /// Returns the new state, or `None` for an unknown id. Clearing the
    /// matches of a deactivated team is the caller's job.
    pub fn toggle_participation(&mut self, id: TeamId) -> Option<bool> {
        let flag = if id == ABSENT_TEAM_ID {
            &mut self.absent.active
        } else {
            match self.team_mut(id) {
                Some(team) => &mut team.active,
                None => {
                    warn!(team = id, "cannot toggle participation of unknown team");
                    return None;
                }
            }
        };
        *flag = !*flag;
        let active = *flag;
        info!(team = id, active, "team participation changed");
        Some(active)
    }

    /// Drop `name` from a team without placing it anywhere else
    pub fn move_to_unassigned(&mut self, name: &str, team_id: TeamId) -> bool {
        let removed = self.remove_from_team(name, team_id);
        if removed {
            info!(member = name, team = team_id, "moved member to unassigned");
        } else {
            warn!(member = name, team = team_id, "member not found in team");
        }
        removed
    }

    /// Replace a team's member list (team editor callback).
    ///
    /// Duplicates and names held by another team or the absent bucket are dropped.
    pub fn replace_team_members(&mut self, team_id: TeamId, members: Vec<String>) -> bool {
        if self.team(team_id).is_none() {
            warn!(team = team_id, "cannot edit unknown team");
            return false;
        }
        let mut accepted: Vec<String> = Vec::with_capacity(members.len());
        for name in members {
            if accepted.contains(&name) {
                continue;
            }
            match self.locate(&name) {
                Some(Source::Team(id)) if id == team_id => {}
                None => {}
                Some(other) => {
                    warn!(member = %name, held_by = %other, team = team_id, "dropping member held elsewhere");
                    continue;
                }
            }
            accepted.push(name);
        }
        if let Some(team) = self.team_mut(team_id) {
            team.members = accepted;
        }
        info!(team = team_id, "team members replaced");
        true
    }

    /// Members of the original configuration that are in no team and not absent.
    ///
    /// Always recomputed from the three inputs; never cached.
    pub fn unassigned_members(&self, config: &RosterConfig) -> Vec<String> {
        config
            .all_members()
            .filter(|name| self.locate(name).is_none())
            .map(str::to_string)
            .collect()
    }

    /// True when no name is held by more than one container
    pub fn is_consistent(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.teams
            .iter()
            .flat_map(|t| t.members.iter())
            .chain(self.absent.members.iter())
            .all(|name| seen.insert(name.as_str()))
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
