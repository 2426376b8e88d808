use super::*;

fn teams(ids: &[TeamId]) -> Vec<Team> {
    ids.iter().map(|&id| Team::new(id, Vec::new())).collect()
}

#[test]
fn test_insufficient_teams() {
    let registry = MatchRegistry::new();
    assert_eq!(build_table(&teams(&[]), &registry), MatchTable::InsufficientTeams);
    assert_eq!(build_table(&teams(&[1]), &registry), MatchTable::InsufficientTeams);

    let mut two = teams(&[1, 2]);
    two[1].active = false;
    assert_eq!(build_table(&two, &registry), MatchTable::InsufficientTeams);
}

#[test]
fn test_orientation_law() {
    let mut registry = MatchRegistry::new();
    registry.record_result(1, 2, 3, 1).unwrap();
    let table = build_table(&teams(&[1, 2]), &registry);
    let grid = table.grid().unwrap();

    match grid.cell(1, 2).unwrap() {
        MatchCell::Played { score, result, .. } => {
            assert_eq!(*score, (3, 1));
            assert_eq!(*result, CellResult::Win);
        }
        other => panic!("unexpected cell {:?}", other),
    }
    match grid.cell(2, 1).unwrap() {
        MatchCell::Played { score, result, .. } => {
            assert_eq!(*score, (1, 3));
            assert_eq!(*result, CellResult::Loss);
        }
        other => panic!("unexpected cell {:?}", other),
    }
    assert_eq!(grid.cell(2, 1).unwrap().display_text(), "1-3");
}

#[test]
fn test_draw_and_pending_cells() {
    let mut registry = MatchRegistry::new();
    registry.record_result(1, 2, 2, 2).unwrap();
    let table = build_table(&teams(&[1, 2, 3]), &registry);
    let grid = table.grid().unwrap();

    assert_eq!(grid.size(), 3);
    assert_eq!(
        grid.cell(1, 2),
        Some(&MatchCell::Played {
            key: pair_key(1, 2),
            score: (2, 2),
            result: CellResult::Draw,
        })
    );
    assert_eq!(grid.cell(3, 1), Some(&MatchCell::Pending { key: pair_key(1, 3) }));
    assert_eq!(grid.cell(2, 2), Some(&MatchCell::Diagonal));
    assert_eq!(grid.cell(2, 2).unwrap().key(), None);
}

#[test]
fn test_inactive_teams_are_left_out() {
    let mut registry = MatchRegistry::new();
    registry.record_result(3, 1, 0, 1).unwrap();
    let mut roster = teams(&[1, 2, 3]);
    roster[1].active = false;

    let table = build_table(&roster, &registry);
    let grid = table.grid().unwrap();
    assert_eq!(grid.teams, vec![1, 3]);
    assert!(grid.cell(2, 1).is_none());
    assert_eq!(grid.cell(1, 3).unwrap().display_text(), "1-0");
}

#[test]
fn test_display_renders_grid() {
    let mut registry = MatchRegistry::new();
    registry.record_result(1, 2, 3, 1).unwrap();
    let text = build_table(&teams(&[1, 2]), &registry).to_string();
    assert!(text.contains("3-1W"));
    assert!(text.contains("1-3L"));
    assert!(build_table(&teams(&[1]), &registry)
        .to_string()
        .contains("Not enough participating teams"));
}
