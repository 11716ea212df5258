use std::collections::HashSet;

use crate::models::{GameId, Package, PackageStats};

use super::indexer::DataIndex;

/// Per-package statistics together with the game ids behind them.
/// The combination search unions the `covered` sets.
#[derive(Debug, Clone)]
pub struct PackageCoverage {
    pub stats: PackageStats,
    pub covered: HashSet<GameId>,
}

/// Union of the games played by every selected team.
///
/// Teams missing from the dataset contribute nothing.
pub fn target_games<'a, I>(index: &DataIndex, teams: I) -> HashSet<GameId>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut target = HashSet::new();
    for team in teams {
        if let Some(games) = index.games_for_team(team) {
            target.extend(games.iter().copied());
        }
    }
    target
}

/// Computes coverage statistics for every package, in package id order.
pub fn calculate_coverage(index: &DataIndex, target: &HashSet<GameId>) -> Vec<PackageCoverage> {
    index
        .packages
        .values()
        .map(|package| package_coverage(index, package, target))
        .collect()
}

fn package_coverage(
    index: &DataIndex,
    package: &Package,
    target: &HashSet<GameId>,
) -> PackageCoverage {
    let mut covered = HashSet::new();
    let mut live = HashSet::new();
    let mut on_demand = HashSet::new();

    for offer in index.offers_for_package(package.id) {
        if !target.contains(&offer.game_id) {
            continue;
        }
        if offer.covers() {
            covered.insert(offer.game_id);
        }
        if offer.live {
            live.insert(offer.game_id);
        }
        if offer.highlights {
            on_demand.insert(offer.game_id);
        }
    }

    let stats = PackageStats {
        id: package.id,
        name: package.name.clone(),
        monthly_price: package.monthly_price,
        yearly_price: package.yearly_price,
        coverage: coverage_percent(covered.len(), target.len()),
        covered_games: covered.len(),
        live_games: live.len(),
        on_demand_games: on_demand.len(),
        games_per_euro: games_per_euro(covered.len(), package.yearly_price),
    };

    PackageCoverage { stats, covered }
}

/// Share of `total` that `covered` represents, 0-100. Zero when `total` is 0.
pub fn coverage_percent(covered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    covered as f64 / total as f64 * 100.0
}

/// Covered games per currency unit. Free packages report the raw count.
pub fn games_per_euro(covered: usize, yearly_price: f64) -> f64 {
    if yearly_price > 0.0 {
        covered as f64 / yearly_price
    } else {
        covered as f64
    }
}
