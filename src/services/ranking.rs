use std::time::Instant;

use crate::models::RankingResult;

use super::combinations::find_best_combinations;
use super::coverage::{calculate_coverage, target_games, PackageCoverage};
use super::indexer::DataIndex;

/// Tuning for the ranking engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// Largest number of packages combined in one recommendation
    pub max_combination_size: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_combination_size: 3,
        }
    }
}

/// Orders packages by coverage (highest first), then yearly price (lowest
/// first). The sort is stable, so remaining ties keep package id order.
pub fn rank_packages(packages: &mut [PackageCoverage]) {
    // Coverage shares one denominator, so comparing covered counts is exact
    packages.sort_by(|a, b| {
        b.stats
            .covered_games
            .cmp(&a.stats.covered_games)
            .then_with(|| a.stats.yearly_price.total_cmp(&b.stats.yearly_price))
    });
}

/// Ranks every package and finds the best combinations for the selected teams.
///
/// Never fails: an empty or unknown selection yields zero coverage
/// everywhere and no combinations.
pub fn calculate_package_rankings<'a, I>(
    index: &DataIndex,
    teams: I,
    config: &RankingConfig,
) -> RankingResult
where
    I: IntoIterator<Item = &'a str>,
{
    let start = Instant::now();

    let target = target_games(index, teams);
    let mut packages = calculate_coverage(index, &target);
    rank_packages(&mut packages);

    let combinations =
        find_best_combinations(&packages, target.len(), config.max_combination_size);

    tracing::info!(
        total_games = target.len(),
        packages = packages.len(),
        combinations = combinations.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Package ranking completed"
    );

    RankingResult {
        packages: packages.into_iter().map(|p| p.stats).collect(),
        combinations,
        total_games: target.len(),
    }
}
