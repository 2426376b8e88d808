//! End-to-end roster scenarios
//!
//! These drive a session through gestures the way a front end would:
//! - Selecting members and assigning them to a team
//! - Recording results and reading them back from the match table
//! - Withdrawing a team from the tournament

use roster_core::{
    CellResult, Gesture, MatchCell, MatchTable, NoDialogs, NoopSave, Outcome, RosterConfig,
    Session, Source, Target, ABSENT_TEAM_ID,
};

fn session_from_toml(toml: &str) -> Session {
    let config = RosterConfig::from_toml_str(toml).unwrap();
    Session::new(config, Box::new(NoopSave), Box::new(NoDialogs)).unwrap()
}

fn two_teams() -> Session {
    session_from_toml(
        r#"
        [[teams]]
        id = 1
        members = ["Alice", "Bob"]

        [[teams]]
        id = 2
        members = ["Carol"]
        "#,
    )
}

fn three_teams() -> Session {
    session_from_toml(
        r#"
        [[teams]]
        id = 1
        members = ["Alice"]

        [[teams]]
        id = 2
        members = ["Bob"]

        [[teams]]
        id = 3
        members = ["Carol"]
        "#,
    )
}

fn assert_unique_membership(session: &Session) {
    let store = session.store();
    assert!(store.is_consistent(), "a member is held in more than one place");
    for name in session.config().all_members() {
        let held = store.teams().iter().filter(|t| t.contains(name)).count()
            + usize::from(store.absent().contains(name));
        assert!(held <= 1, "{} is held {} times", name, held);
    }
}

// =============================================================================
// Assignment
// =============================================================================

#[test]
fn test_move_alice_to_team_two() {
    let mut session = two_teams();

    session.dispatch(
        Gesture::Click,
        Target::Member {
            name: "Alice".into(),
            source: Source::Team(1),
        },
    );
    session.dispatch(Gesture::Click, Target::TeamHeader(2));

    assert_eq!(session.store().team(1).unwrap().members, vec!["Bob"]);
    assert_eq!(session.store().team(2).unwrap().members, vec!["Carol", "Alice"]);
    assert!(session.selection().is_empty());
    assert_unique_membership(&session);
}

#[test]
fn test_uniqueness_holds_through_mixed_gestures() {
    let mut session = three_teams();

    session.mark_absent("Bob");
    session.move_to_unassigned("Carol", 3);
    assert_unique_membership(&session);

    // Select every member from wherever it is, including a stale duplicate
    session.toggle_member_selection("Bob", Source::Absent);
    session.toggle_member_selection("Carol", Source::Unassigned);
    session.toggle_member_selection("Alice", Source::Team(1));
    session.toggle_member_selection("Alice", Source::Unassigned);
    let report = session.assign_selection(3);
    assert_eq!(report.total(), 4);
    assert_unique_membership(&session);
    assert_eq!(
        session.store().team(3).unwrap().members,
        vec!["Bob", "Carol", "Alice"]
    );

    session.toggle_member_selection("Alice", Source::Team(3));
    session.toggle_member_selection("Bob", Source::Team(3));
    session.assign_selection(ABSENT_TEAM_ID);
    assert_unique_membership(&session);
    assert_eq!(session.store().absent().members, vec!["Alice", "Bob"]);
    assert!(session.unassigned_members().is_empty());
}

// =============================================================================
// Match table
// =============================================================================

#[test]
fn test_draw_shows_in_both_cells() {
    let mut session = two_teams();
    assert_eq!(session.submit_score(1, 2, 2, 2), Outcome::Changed);
    assert!(session.matches().lookup(2, 1).unwrap().winner.is_none());

    let table = session.match_table();
    let grid = table.grid().unwrap();
    match grid.cell(1, 2).unwrap() {
        MatchCell::Played { score, result, .. } => {
            assert_eq!(*score, (2, 2));
            assert_eq!(*result, CellResult::Draw);
        }
        other => panic!("expected a played cell, got {:?}", other),
    }
    assert_eq!(grid.cell(1, 2).unwrap().display_text(), "2-2");
}

#[test]
fn test_scores_are_oriented_to_the_row_team() {
    let mut session = two_teams();
    session.submit_score(1, 2, 3, 1);

    let table = session.match_table();
    let grid = table.grid().unwrap();
    assert_eq!(grid.cell(1, 2).unwrap().display_text(), "3-1");
    assert_eq!(grid.cell(2, 1).unwrap().display_text(), "1-3");
}

#[test]
fn test_withdrawing_a_team_shrinks_the_table() {
    let mut session = three_teams();
    session.submit_score(1, 2, 1, 0);
    session.submit_score(3, 2, 0, 2);
    session.submit_score(1, 3, 5, 5);

    session.dispatch(Gesture::Click, Target::ParticipationToggle(2));

    let table = session.match_table();
    let grid = table.grid().unwrap();
    assert_eq!(grid.teams, vec![1, 3]);
    assert!(session.matches().lookup(1, 2).is_none());
    assert!(session.matches().lookup(2, 3).is_none());
    assert!(session.matches().lookup(1, 3).is_some());

    let standings = session.standings();
    assert_eq!(standings.rows.len(), 2);
    assert_eq!(standings.row(1).unwrap().draws, 1);
}

#[test]
fn test_single_active_team_has_no_table() {
    let mut session = two_teams();
    session.toggle_participation(2);
    assert_eq!(session.match_table(), MatchTable::InsufficientTeams);
}
