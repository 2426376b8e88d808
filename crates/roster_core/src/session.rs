//! Session: owns the roster, matches and selection, and routes user gestures.
//!
//! A front end reports each gesture as a `(Gesture, Target)` pair. The session
//! looks the pair up in a routing table, runs the handler to completion and
//! returns an [`Outcome`] telling the caller whether to re-render.
//! Persistence and dialogs are reached through [`SaveHook`] and [`DialogHook`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::assignment::{assign_to_absent, assign_to_team, AssignmentReport};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::matches::{pair_key, MatchRegistry, PairKey};
use crate::roster::RosterStore;
use crate::selection::SelectionSet;
use crate::standings::{calculate_standings, Standings};
use crate::table::{build_table, MatchTable};
use crate::types::{AbsentBucket, Source, Team, TeamId, ABSENT_TEAM_ID};

// =============================================================================
// Collaborators
// =============================================================================

/// Persistence collaborator.
///
/// Called after every change that should survive a reload. The session does
/// not act on failures beyond logging them.
pub trait SaveHook {
    fn save(&mut self, state: &SessionState) -> Result<()>;
}

/// Save hook that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSave;

impl SaveHook for NoopSave {
    fn save(&mut self, _state: &SessionState) -> Result<()> {
        Ok(())
    }
}

/// Dialog collaborator: opens editors that later call back into
/// [`Session::submit_score`] or [`Session::submit_team`].
pub trait DialogHook {
    fn open_score_editor(&mut self, team_a: TeamId, team_b: TeamId, key: PairKey);

    fn open_team_editor(&mut self, team: TeamId);
}

/// Dialog hook for front ends without editors
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDialogs;

impl DialogHook for NoDialogs {
    fn open_score_editor(&mut self, _team_a: TeamId, _team_b: TeamId, _key: PairKey) {}

    fn open_team_editor(&mut self, _team: TeamId) {}
}

// =============================================================================
// Persisted state
// =============================================================================

/// Everything a save hook needs to restore a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub absent: AbsentBucket,
    #[serde(default)]
    pub matches: MatchRegistry,
}

impl SessionState {
    /// Load state from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Check the invariants a live session relies on.
    ///
    /// Team ids must be positive, unique and not the absent id; each member
    /// is held in at most one place; every match record sits under its own
    /// pair key and involves two distinct, existing, active teams.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
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
        }

        let mut names = HashSet::new();
        let held = self
            .teams
            .iter()
            .flat_map(|t| t.members.iter())
            .chain(self.absent.members.iter());
        for name in held {
            if !names.insert(name.as_str()) {
                return Err(RosterError::DuplicateMember { name: name.clone() });
            }
        }

        for (key, record) in self.matches.iter() {
            if record.team1 == record.team2 {
                return Err(RosterError::SelfMatch(record.team1));
            }
            if *key != pair_key(record.team1, record.team2) {
                return Err(RosterError::InvalidPairKey(key.to_string()));
            }
            for id in [record.team1, record.team2] {
                match self.teams.iter().find(|t| t.id == id) {
                    None => return Err(RosterError::UnknownTeam(id)),
                    Some(team) if !team.active => {
                        return Err(RosterError::InactiveTeamMatch {
                            key: key.to_string(),
                            team: id,
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Save state to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

// =============================================================================
// Gestures
// =============================================================================

/// Kind of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Click,
    ContextMenu,
}

/// What the gesture landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    ParticipationToggle(TeamId),
    /// "Return" button next to an absent member
    ReturnButton(String),
    MoveToUnassigned { member: String, team: TeamId },
    EditTeam(TeamId),
    TeamHeader(TeamId),
    Member { name: String, source: Source },
    MatchCell { row: TeamId, col: TeamId },
    PaletteClear,
    PaletteClose,
    PaletteRemove { name: String, source: Source },
    /// "Mark absent" entry of the member context menu
    MarkAbsent(String),
}

/// Payload-free discriminant of [`Target`], used as the routing key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    ParticipationToggle,
    ReturnButton,
    MoveToUnassigned,
    EditTeam,
    TeamHeader,
    Member,
    MatchCell,
    PaletteClear,
    PaletteClose,
    PaletteRemove,
    MarkAbsent,
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::ParticipationToggle(_) => TargetKind::ParticipationToggle,
            Target::ReturnButton(_) => TargetKind::ReturnButton,
            Target::MoveToUnassigned { .. } => TargetKind::MoveToUnassigned,
            Target::EditTeam(_) => TargetKind::EditTeam,
            Target::TeamHeader(_) => TargetKind::TeamHeader,
            Target::Member { .. } => TargetKind::Member,
            Target::MatchCell { .. } => TargetKind::MatchCell,
            Target::PaletteClear => TargetKind::PaletteClear,
            Target::PaletteClose => TargetKind::PaletteClose,
            Target::PaletteRemove { .. } => TargetKind::PaletteRemove,
            Target::MarkAbsent(_) => TargetKind::MarkAbsent,
        }
    }
}

/// Result of handling one gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; the caller should re-render
    Changed,
    /// Handled, nothing to redraw
    Unchanged,
    /// No handler for this gesture/target, or the handler declined it
    Ignored,
    /// Show the member context menu for this member
    ContextMenu { member: String, source: Source },
}

impl Outcome {
    pub fn needs_render(&self) -> bool {
        matches!(self, Outcome::Changed)
    }

    fn from_flag(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

type Handler = fn(&mut Session, Target) -> Outcome;

const ROUTES: &[(Gesture, TargetKind, Handler)] = &[
    (Gesture::Click, TargetKind::ParticipationToggle, Session::on_participation_toggle),
    (Gesture::Click, TargetKind::ReturnButton, Session::on_return_button),
    (Gesture::Click, TargetKind::MoveToUnassigned, Session::on_move_to_unassigned),
    (Gesture::Click, TargetKind::EditTeam, Session::on_edit_team),
    (Gesture::Click, TargetKind::TeamHeader, Session::on_team_header),
    (Gesture::Click, TargetKind::Member, Session::on_member_click),
    (Gesture::Click, TargetKind::MatchCell, Session::on_match_cell),
    (Gesture::Click, TargetKind::PaletteClear, Session::on_palette_clear),
    (Gesture::Click, TargetKind::PaletteClose, Session::on_palette_clear),
    (Gesture::Click, TargetKind::PaletteRemove, Session::on_palette_remove),
    (Gesture::ContextMenu, TargetKind::Member, Session::on_member_context_menu),
    (Gesture::ContextMenu, TargetKind::MarkAbsent, Session::on_mark_absent),
    (Gesture::ContextMenu, TargetKind::EditTeam, Session::on_edit_team),
];

// =============================================================================
// Session
// =============================================================================

/// One roster editing session
pub struct Session {
    config: RosterConfig,
    store: RosterStore,
    matches: MatchRegistry,
    selection: SelectionSet,
    save: Box<dyn SaveHook>,
    dialogs: Box<dyn DialogHook>,
}

impl Session {
    /// Start a fresh session from the configuration snapshot
    pub fn new(
        config: RosterConfig,
        save: Box<dyn SaveHook>,
        dialogs: Box<dyn DialogHook>,
    ) -> Result<Self> {
        config.validate()?;
        let store = RosterStore::from_config(&config);
        Ok(Self {
            config,
            store,
            matches: MatchRegistry::new(),
            selection: SelectionSet::new(),
            save,
            dialogs,
        })
    }

    /// Resume a session from saved state.
    ///
    /// The configuration still defines the universe of members. State that
    /// fails [`SessionState::validate`] is rejected.
    pub fn restore(
        config: RosterConfig,
        state: SessionState,
        save: Box<dyn SaveHook>,
        dialogs: Box<dyn DialogHook>,
    ) -> Result<Self> {
        config.validate()?;
        state.validate()?;
        let store = RosterStore::from_parts(state.teams, state.absent);
        Ok(Self {
            config,
            store,
            matches: state.matches,
            selection: SelectionSet::new(),
            save,
            dialogs,
        })
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn matches(&self) -> &MatchRegistry {
        &self.matches
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Snapshot of the persistable state
    pub fn state(&self) -> SessionState {
        SessionState {
            teams: self.store.teams().to_vec(),
            absent: self.store.absent().clone(),
            matches: self.matches.clone(),
        }
    }

    pub fn unassigned_members(&self) -> Vec<String> {
        self.store.unassigned_members(&self.config)
    }

    pub fn match_table(&self) -> MatchTable {
        build_table(self.store.teams(), &self.matches)
    }

    pub fn standings(&self) -> Standings {
        calculate_standings(self.store.teams(), &self.matches)
    }

    fn persist(&mut self) {
        let state = self.state();
        if let Err(e) = self.save.save(&state) {
            warn!(error = %e, "failed to save session state");
        }
    }

    /// Route a gesture to its handler
    pub fn dispatch(&mut self, gesture: Gesture, target: Target) -> Outcome {
        let kind = target.kind();
        let handler = ROUTES
            .iter()
            .find(|(g, k, _)| *g == gesture && *k == kind)
            .map(|(_, _, handler)| *handler);
        match handler {
            Some(handler) => {
                debug!(?gesture, ?target, "dispatching gesture");
                handler(self, target)
            }
            None => {
                debug!(?gesture, ?kind, "no handler for gesture");
                Outcome::Ignored
            }
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Flip a team's participation; deactivation deletes its matches
    pub fn toggle_participation(&mut self, team: TeamId) -> Outcome {
        let Some(active) = self.store.toggle_participation(team) else {
            return Outcome::Ignored;
        };
        if !active && team != ABSENT_TEAM_ID {
            self.matches.cascade_deactivate(team);
        }
        self.persist();
        Outcome::Changed
    }

    pub fn toggle_member_selection(&mut self, name: &str, source: Source) -> Outcome {
        self.selection.toggle(name, source);
        Outcome::Changed
    }

    /// Assign the current selection to a team, or to absent for the absent id
    pub fn assign_selection(&mut self, target: TeamId) -> AssignmentReport {
        let report = if target == ABSENT_TEAM_ID {
            assign_to_absent(&mut self.store, &mut self.selection)
        } else {
            assign_to_team(&mut self.store, &mut self.selection, target)
        };
        if report.moved > 0 {
            self.persist();
        }
        report
    }

    pub fn mark_absent(&mut self, name: &str) -> Outcome {
        let changed = self.store.mark_absent(name);
        if changed {
            self.persist();
        }
        Outcome::from_flag(changed)
    }

    pub fn return_from_absent(&mut self, name: &str) -> Outcome {
        let changed = self.store.return_from_absent(name);
        if changed {
            self.persist();
        }
        Outcome::from_flag(changed)
    }

    pub fn move_to_unassigned(&mut self, name: &str, team: TeamId) -> Outcome {
        let changed = self.store.move_to_unassigned(name, team);
        if changed {
            self.persist();
        }
        Outcome::from_flag(changed)
    }

    /// Score editor callback. Both teams must exist, differ and be active.
    pub fn submit_score(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        score_a: u32,
        score_b: u32,
    ) -> Outcome {
        for team in [team_a, team_b] {
            if self.store.team(team).map(|t| t.active) != Some(true) {
                warn!(team, "ignoring score for a missing or inactive team");
                return Outcome::Unchanged;
            }
        }
        match self.matches.record_result(team_a, team_b, score_a, score_b) {
            Ok(_) => {
                self.persist();
                Outcome::Changed
            }
            Err(e) => {
                warn!(error = %e, "rejected match result");
                Outcome::Unchanged
            }
        }
    }

    /// Team editor callback
    pub fn submit_team(&mut self, team: TeamId, members: Vec<String>) -> Outcome {
        let changed = self.store.replace_team_members(team, members);
        if changed {
            self.persist();
        }
        Outcome::from_flag(changed)
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    fn on_participation_toggle(&mut self, target: Target) -> Outcome {
        let Target::ParticipationToggle(team) = target else {
            return Outcome::Ignored;
        };
        self.toggle_participation(team)
    }

    fn on_return_button(&mut self, target: Target) -> Outcome {
        let Target::ReturnButton(name) = target else {
            return Outcome::Ignored;
        };
        self.return_from_absent(&name)
    }

    fn on_move_to_unassigned(&mut self, target: Target) -> Outcome {
        let Target::MoveToUnassigned { member, team } = target else {
            return Outcome::Ignored;
        };
        self.move_to_unassigned(&member, team)
    }

    fn on_edit_team(&mut self, target: Target) -> Outcome {
        let Target::EditTeam(team) = target else {
            return Outcome::Ignored;
        };
        if self.store.team(team).is_none() {
            return Outcome::Ignored;
        }
        self.dialogs.open_team_editor(team);
        Outcome::Unchanged
    }

    fn on_team_header(&mut self, target: Target) -> Outcome {
        let Target::TeamHeader(team) = target else {
            return Outcome::Ignored;
        };
        // Headers are only assignment targets while members are selected
        if !self.selection.is_assign_mode() {
            return Outcome::Ignored;
        }
        let report = self.assign_selection(team);
        info!(team, moved = report.moved, skipped = report.skipped, "assigned selection");
        Outcome::Changed
    }

    fn on_member_click(&mut self, target: Target) -> Outcome {
        let Target::Member { name, source } = target else {
            return Outcome::Ignored;
        };
        self.toggle_member_selection(&name, source)
    }

    fn on_match_cell(&mut self, target: Target) -> Outcome {
        let Target::MatchCell { row, col } = target else {
            return Outcome::Ignored;
        };
        if row == col {
            return Outcome::Ignored;
        }
        self.dialogs.open_score_editor(row, col, pair_key(row, col));
        Outcome::Unchanged
    }

    fn on_palette_clear(&mut self, _target: Target) -> Outcome {
        let had_selection = !self.selection.is_empty();
        self.selection.clear();
        Outcome::from_flag(had_selection)
    }

    fn on_palette_remove(&mut self, target: Target) -> Outcome {
        let Target::PaletteRemove { name, source } = target else {
            return Outcome::Ignored;
        };
        Outcome::from_flag(self.selection.remove(&name, source))
    }

    fn on_member_context_menu(&mut self, target: Target) -> Outcome {
        let Target::Member { name, source } = target else {
            return Outcome::Ignored;
        };
        // Absent members get no context menu
        if source == Source::Absent {
            return Outcome::Ignored;
        }
        Outcome::ContextMenu {
            member: name,
            source,
        }
    }

    fn on_mark_absent(&mut self, target: Target) -> Outcome {
        let Target::MarkAbsent(name) = target else {
            return Outcome::Ignored;
        };
        self.mark_absent(&name)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
