//! Standings derived from the match registry

use std::cmp::Reverse;
use std::fmt;

use crate::matches::MatchRegistry;
use crate::types::{Team, TeamId};

/// Points awarded for a win
pub const POINTS_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_DRAW: u32 = 1;

/// One line of the standings table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingRow {
    pub team: TeamId,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Sums of `u32` scores, kept as `u64`
    pub goals_for: u64,
    pub goals_against: u64,
    pub points: u32,
}

impl StandingRow {
    fn new(team: TeamId) -> Self {
        Self {
            team,
            ..Default::default()
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    fn add_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_DRAW;
            }
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }
}

/// Sorted standings of the active teams
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    pub rows: Vec<StandingRow>,
}

impl Standings {
    pub fn row(&self, team: TeamId) -> Option<&StandingRow> {
        self.rows.iter().find(|r| r.team == team)
    }
}

/// Compute standings for active teams.
///
/// Only results between two active teams count. Ties on points are broken by
/// goal difference, then goals scored, then team id.
pub fn calculate_standings(teams: &[Team], registry: &MatchRegistry) -> Standings {
    let mut rows: Vec<StandingRow> = teams
        .iter()
        .filter(|t| t.active)
        .map(|t| StandingRow::new(t.id))
        .collect();

    for (_, record) in registry.iter() {
        let both_active = rows.iter().any(|r| r.team == record.team1)
            && rows.iter().any(|r| r.team == record.team2);
        if !both_active {
            continue;
        }
        for row in rows.iter_mut() {
            if record.involves(row.team) {
                let (scored, conceded) = record.scores_for(row.team);
                row.add_result(scored, conceded);
            }
        }
    }

    rows.sort_by_key(|r| {
        (
            Reverse(r.points),
            Reverse(r.goal_difference()),
            Reverse(r.goals_for),
            r.team,
        )
    });
    Standings { rows }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<4} {:<8} {:>3} {:>3} {:>3} {:>3} {:>7} {:>4}",
            "#", "Team", "P", "W", "D", "L", "Goals", "Pts"
        )?;
        writeln!(f, "{}", "-".repeat(44))?;
        for (rank, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{:<4} {:<8} {:>3} {:>3} {:>3} {:>3} {:>7} {:>4}",
                rank + 1,
                format!("Team {}", row.team),
                row.played,
                row.wins,
                row.draws,
                row.losses,
                format!("{}:{}", row.goals_for, row.goals_against),
                row.points
            )?;
        }
        Ok(())
    }
}
