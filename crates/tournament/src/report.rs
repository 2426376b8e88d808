//! Text and JSON reports of a session

use roster_core::{MatchTable, Session, ABSENT_TEAM_ID};
use serde::Serialize;

/// Serializable view of what the roster screen shows
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub teams: Vec<TeamView>,
    pub absent: Vec<String>,
    pub absent_active: bool,
    pub unassigned: Vec<String>,
    pub results: Vec<ResultView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub id: u32,
    pub active: bool,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub key: String,
    pub team1: u32,
    pub team2: u32,
    pub score: String,
    pub winner: Option<u32>,
}

impl RosterView {
    pub fn from_session(session: &Session) -> Self {
        let store = session.store();
        Self {
            teams: store
                .teams()
                .iter()
                .map(|t| TeamView {
                    id: t.id,
                    active: t.active,
                    members: t.members.clone(),
                })
                .collect(),
            absent: store.absent().members.clone(),
            absent_active: store.absent().active,
            unassigned: session.unassigned_members(),
            results: session
                .matches()
                .iter()
                .map(|(key, record)| ResultView {
                    key: key.to_string(),
                    team1: record.team1,
                    team2: record.team2,
                    score: format!("{}-{}", record.score_team1, record.score_team2),
                    winner: record.winner,
                })
                .collect(),
        }
    }
}

/// Generate the full text report: teams, absent, unassigned, match table, standings
pub fn generate_report(session: &Session) -> String {
    let store = session.store();
    let mut report = String::new();

    report.push_str("=== Teams ===\n\n");
    for team in store.teams() {
        let mark = if team.active { "✓" } else { "✗" };
        report.push_str(&format!("Team {} [{}]\n", team.id, mark));
        if team.members.is_empty() {
            report.push_str("  (no members)\n");
        }
        for member in &team.members {
            report.push_str(&format!("  - {}\n", member));
        }
    }

    let absent = store.absent();
    let mark = if absent.active { "✓" } else { "✗" };
    report.push_str(&format!("Absent (team {}) [{}]\n", ABSENT_TEAM_ID, mark));
    if absent.is_empty() {
        report.push_str("  (no absent members)\n");
    }
    for member in &absent.members {
        report.push_str(&format!("  - {}\n", member));
    }

    report.push_str("\n=== Unassigned ===\n\n");
    let unassigned = session.unassigned_members();
    if unassigned.is_empty() {
        report.push_str("All members belong to a team\n");
    } else {
        report.push_str(&unassigned.join(", "));
        report.push('\n');
    }

    report.push_str("\n=== Match Table ===\n\n");
    let table = session.match_table();
    report.push_str(&table.to_string());

    if let MatchTable::Grid(_) = table {
        report.push_str("\n=== Standings ===\n\n");
        report.push_str(&session.standings().to_string());
    }

    report
}

/// Print report to stdout
pub fn print_report(session: &Session) {
    println!("{}", generate_report(session));
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{NoDialogs, NoopSave, RosterConfig};

    fn session() -> Session {
        let config = RosterConfig::from_toml_str(
            "[[teams]]\nid = 1\nmembers = [\"Alice\", \"Bob\"]\n\n[[teams]]\nid = 2\nmembers = [\"Carol\"]\n",
        )
        .unwrap();
        Session::new(config, Box::new(NoopSave), Box::new(NoDialogs)).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let mut session = session();
        session.submit_score(1, 2, 3, 1);
        session.move_to_unassigned("Bob", 1);

        let report = generate_report(&session);
        assert!(report.contains("Team 1 [✓]"));
        assert!(report.contains("(no absent members)"));
        assert!(report.contains("=== Unassigned ===\n\nBob\n"));
        assert!(report.contains("3-1W"));
        assert!(report.contains("=== Standings ==="));
    }

    #[test]
    fn test_report_without_table() {
        let mut session = session();
        session.toggle_participation(1);
        let report = generate_report(&session);
        assert!(report.contains("Not enough participating teams"));
        assert!(!report.contains("=== Standings ==="));
    }

    #[test]
    fn test_json_view() {
        let mut session = session();
        session.submit_score(2, 1, 0, 2);
        session.mark_absent("Carol");

        let json = serde_json::to_value(RosterView::from_session(&session)).unwrap();
        assert_eq!(json["absent"][0], "Carol");
        assert_eq!(json["results"][0]["key"], "1-2");
        assert_eq!(json["results"][0]["winner"], 1);
        assert_eq!(json["teams"][1]["members"].as_array().unwrap().len(), 0);
    }
}
