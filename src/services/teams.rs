use crate::models::TeamSummary;

use super::indexer::DataIndex;

/// Teams whose name contains `query`, ignoring case, sorted by name.
///
/// An empty query returns every team. Rows with a blank team name are never
/// offered.
pub fn search_teams(index: &DataIndex, query: &str, limit: Option<usize>) -> Vec<TeamSummary> {
    let needle = query.trim().to_lowercase();

    let mut teams: Vec<TeamSummary> = index
        .games_by_team
        .iter()
        .filter(|(name, _)| !name.trim().is_empty())
        .filter(|(name, _)| needle.is_empty() || name.to_lowercase().contains(&needle))
        .map(|(name, games)| TeamSummary {
            name: name.clone(),
            game_count: games.len(),
        })
        .collect();

    teams.sort_by(|a, b| a.name.cmp(&b.name));

    if let Some(limit) = limit {
        teams.truncate(limit);
    }

    teams
}
