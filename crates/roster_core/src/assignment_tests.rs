use super::*;
use crate::config::{RosterConfig, TeamConfig};

fn config() -> RosterConfig {
    RosterConfig {
        teams: vec![
            TeamConfig {
                id: 1,
                members: vec!["Alice".into(), "Bob".into()],
            },
            TeamConfig {
                id: 2,
                members: vec!["Carol".into()],
            },
            TeamConfig {
                id: 3,
                members: vec!["Dave".into()],
            },
        ],
    }
}

#[test]
fn test_assign_single_member() {
    let mut store = RosterStore::from_config(&config());
    let mut selection = SelectionSet::new();
    selection.toggle("Alice", Source::Team(1));

    let report = assign_to_team(&mut store, &mut selection, 2);

    assert_eq!(report, AssignmentReport { moved: 1, skipped: 0 });
    assert_eq!(store.team(1).unwrap().members, vec!["Bob"]);
    assert_eq!(store.team(2).unwrap().members, vec!["Carol", "Alice"]);
    assert!(selection.is_empty());
}

#[test]
fn test_assign_mixed_sources() {
    let cfg = config();
    let mut store = RosterStore::from_config(&cfg);
    store.mark_absent("Dave");
    store.move_to_unassigned("Bob", 1);

    let mut selection = SelectionSet::new();
    selection.toggle("Dave", Source::Absent);
    selection.toggle("Bob", Source::Unassigned);
    selection.toggle("Carol", Source::Team(2));

    let report = assign_to_team(&mut store, &mut selection, 1);

    assert_eq!(report.moved, 3);
    assert_eq!(store.team(1).unwrap().members, vec!["Alice", "Dave", "Bob", "Carol"]);
    assert!(store.team(2).unwrap().members.is_empty());
    assert!(store.absent().is_empty());
    assert!(store.unassigned_members(&cfg).is_empty());
    assert!(store.is_consistent());
}

#[test]
fn test_assign_to_current_team_is_idempotent() {
    let mut store = RosterStore::from_config(&config());
    let before = store.clone();
    let mut selection = SelectionSet::new();
    selection.toggle("Bob", Source::Team(1));
    selection.toggle("Alice", Source::Team(1));

    let report = assign_to_team(&mut store, &mut selection, 1);

    assert_eq!(report.moved, 2);
    assert_eq!(store, before);
    assert!(selection.is_empty());
}

#[test]
fn test_partial_application_continues() {
    let mut store = RosterStore::from_config(&config());
    let mut selection = SelectionSet::new();
    // Stale entry: Carol is not unassigned, she is in team 2
    selection.toggle("Carol", Source::Unassigned);
    selection.toggle("Alice", Source::Team(1));

    let report = assign_to_team(&mut store, &mut selection, 3);

    assert_eq!(report, AssignmentReport { moved: 1, skipped: 1 });
    assert_eq!(store.team(3).unwrap().members, vec!["Dave", "Alice"]);
    assert_eq!(store.team(2).unwrap().members, vec!["Carol"]);
    assert!(store.is_consistent());
    assert!(selection.is_empty());
}

#[test]
fn test_empty_selection_is_noop() {
    let mut store = RosterStore::from_config(&config());
    let before = store.clone();
    let mut selection = SelectionSet::new();
    assert_eq!(assign_to_team(&mut store, &mut selection, 2).total(), 0);
    assert_eq!(assign_to_absent(&mut store, &mut selection).total(), 0);
    assert_eq!(store, before);
}

#[test]
fn test_unknown_target_clears_selection() {
    let mut store = RosterStore::from_config(&config());
    let before = store.clone();
    let mut selection = SelectionSet::new();
    selection.toggle("Alice", Source::Team(1));

    let report = assign_to_team(&mut store, &mut selection, 9);

    assert_eq!(report.skipped, 1);
    assert_eq!(store, before);
    assert!(selection.is_empty());
}

#[test]
fn test_assign_to_absent_ignores_source() {
    let mut store = RosterStore::from_config(&config());
    let mut selection = SelectionSet::new();
    selection.toggle("Alice", Source::Team(3));
    selection.toggle("Carol", Source::Team(2));
    selection.toggle("Zed", Source::Unassigned);

    let report = assign_to_absent(&mut store, &mut selection);

    assert_eq!(report, AssignmentReport { moved: 2, skipped: 1 });
    assert_eq!(store.absent().members, vec!["Alice", "Carol"]);
    assert_eq!(store.team(1).unwrap().members, vec!["Bob"]);
    assert!(selection.is_empty());
    assert!(store.is_consistent());
}
