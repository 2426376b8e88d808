//! Round-robin match table built from active teams

use std::fmt;

use crate::matches::{pair_key, MatchRegistry, PairKey};
use crate::types::{Team, TeamId};

/// Result of a played cell, from the row team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellResult {
    Win,
    Loss,
    Draw,
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchCell {
    /// A team cannot play itself
    Diagonal,
    /// No result yet; clicking opens the score editor for `key`
    Pending { key: PairKey },
    /// `score` is `(row team, column team)`
    Played {
        key: PairKey,
        score: (u32, u32),
        result: CellResult,
    },
}

impl MatchCell {
    pub fn key(&self) -> Option<PairKey> {
        match self {
            MatchCell::Diagonal => None,
            MatchCell::Pending { key } | MatchCell::Played { key, .. } => Some(*key),
        }
    }

    /// Short text shown in the cell
    pub fn display_text(&self) -> String {
        match self {
            MatchCell::Diagonal => "\\".to_string(),
            MatchCell::Pending { .. } => "-".to_string(),
            MatchCell::Played { score, .. } => format!("{}-{}", score.0, score.1),
        }
    }
}

/// Square grid indexed by the active teams in roster order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGrid {
    pub teams: Vec<TeamId>,
    pub rows: Vec<Vec<MatchCell>>,
}

impl MatchGrid {
    pub fn size(&self) -> usize {
        self.teams.len()
    }

    /// Cell for a (row team, column team) pair, if both are in the grid
    pub fn cell(&self, row_team: TeamId, col_team: TeamId) -> Option<&MatchCell> {
        let row = self.teams.iter().position(|&t| t == row_team)?;
        let col = self.teams.iter().position(|&t| t == col_team)?;
        Some(&self.rows[row][col])
    }
}

/// Either a grid or the placeholder shown when fewer than two teams are active
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTable {
    InsufficientTeams,
    Grid(MatchGrid),
}

impl MatchTable {
    pub fn grid(&self) -> Option<&MatchGrid> {
        match self {
            MatchTable::Grid(grid) => Some(grid),
            MatchTable::InsufficientTeams => None,
        }
    }
}

/// Build the table from the active teams only
pub fn build_table(teams: &[Team], registry: &MatchRegistry) -> MatchTable {
    let active: Vec<TeamId> = teams.iter().filter(|t| t.active).map(|t| t.id).collect();
    if active.len() <= 1 {
        return MatchTable::InsufficientTeams;
    }

    let rows = active
        .iter()
        .enumerate()
        .map(|(row_idx, &row_team)| {
            active
                .iter()
                .enumerate()
                .map(|(col_idx, &col_team)| {
                    if row_idx == col_idx {
                        return MatchCell::Diagonal;
                    }
                    let key = pair_key(row_team, col_team);
                    match registry.get(&key) {
                        Some(record) => {
                            let result = match record.winner {
                                None => CellResult::Draw,
                                Some(winner) if winner == row_team => CellResult::Win,
                                Some(_) => CellResult::Loss,
                            };
                            MatchCell::Played {
                                key,
                                score: record.scores_for(row_team),
                                result,
                            }
                        }
                        None => MatchCell::Pending { key },
                    }
                })
                .collect()
        })
        .collect();

    MatchTable::Grid(MatchGrid { teams: active, rows })
}

impl fmt::Display for MatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = match self {
            MatchTable::InsufficientTeams => {
                return writeln!(
                    f,
                    "Not enough participating teams: at least two are needed for a match table"
                );
            }
            MatchTable::Grid(grid) => grid,
        };

        write!(f, "{:>6}", "")?;
        for team in &grid.teams {
            write!(f, "{:>7}", team)?;
        }
        writeln!(f)?;

        for (team, row) in grid.teams.iter().zip(&grid.rows) {
            write!(f, "{:>6}", team)?;
            for cell in row {
                let marker = match cell {
                    MatchCell::Played { result: CellResult::Win, .. } => "W",
                    MatchCell::Played { result: CellResult::Loss, .. } => "L",
                    MatchCell::Played { result: CellResult::Draw, .. } => "D",
                    _ => "",
                };
                write!(f, "{:>7}", format!("{}{}", cell.display_text(), marker))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
