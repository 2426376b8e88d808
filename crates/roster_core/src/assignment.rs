//! Bulk reassignment of selected members.
//!
//! Assignment is best-effort and not transactional: a member that cannot be
//! relocated is skipped and the rest are still processed. The selection is
//! cleared once every item has been tried.

use tracing::info;

use crate::roster::RosterStore;
use crate::selection::SelectionSet;
use crate::types::{Source, TeamId};

/// Outcome counts of one bulk assignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentReport {
    /// Members that ended up in the target
    pub moved: usize,
    /// Members that could not be relocated
    pub skipped: usize,
}

impl AssignmentReport {
    pub fn total(&self) -> usize {
        self.moved + self.skipped
    }
}

/// Move every selected member into `target`, then clear the selection
pub fn assign_to_team(
    store: &mut RosterStore,
    selection: &mut SelectionSet,
    target: TeamId,
) -> AssignmentReport {
    let mut report = AssignmentReport::default();
    if selection.is_empty() {
        info!("no members selected");
        return report;
    }
    if store.team(target).is_none() {
        report.skipped = selection.size();
        selection.clear();
        info!(team = target, "assignment target does not exist");
        return report;
    }

    info!(team = target, count = selection.size(), "assigning selected members");
    for (name, source) in selection.take() {
        match source {
            Source::Absent => {
                store.return_from_absent(&name);
            }
            Source::Unassigned => {}
            Source::Team(id) if id == target => {}
            Source::Team(id) => {
                store.remove_from_team(&name, id);
            }
        }
        if store.place_in_team(&name, target) {
            report.moved += 1;
        } else {
            report.skipped += 1;
        }
    }

    info!(moved = report.moved, skipped = report.skipped, "member assignment finished");
    report
}

/// Mark every selected member absent, then clear the selection.
///
/// The recorded source is ignored: the member is looked up in all teams.
pub fn assign_to_absent(store: &mut RosterStore, selection: &mut SelectionSet) -> AssignmentReport {
    let mut report = AssignmentReport::default();
    if selection.is_empty() {
        info!("no members selected");
        return report;
    }

    info!(count = selection.size(), "marking selected members absent");
    for (name, _) in selection.take() {
        if store.mark_absent(&name) {
            report.moved += 1;
        } else {
            report.skipped += 1;
        }
    }

    info!(moved = report.moved, skipped = report.skipped, "absent assignment finished");
    report
}

#[cfg(test)]
#[path = "assignment_tests.rs"]
mod tests;
