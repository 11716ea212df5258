use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GameId, PackageId};

/// Coverage statistics for one package against the selected teams' games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStats {
    pub id: PackageId,
    pub name: String,
    pub monthly_price: f64,
    pub yearly_price: f64,
    /// Share of the target games the package shows, 0-100
    pub coverage: f64,
    pub covered_games: usize,
    pub live_games: usize,
    pub on_demand_games: usize,
    /// Covered games per currency unit of the yearly-plan price
    pub games_per_euro: f64,
}

/// A set of packages evaluated together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub packages: Vec<PackageStats>,
    pub coverage: f64,
    /// Sum of the members' yearly-plan prices
    pub total_price: f64,
    pub covered_games: usize,
}

impl Combination {
    pub fn size(&self) -> usize {
        self.packages.len()
    }
}

/// Everything the presentation layer needs for one team selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub packages: Vec<PackageStats>,
    pub combinations: Vec<Combination>,
    /// Size of the target game set
    pub total_games: usize,
}

/// One package that carries a scheduled match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAvailability {
    pub package_id: PackageId,
    pub package_name: String,
    pub live: bool,
    pub highlights: bool,
}

/// A game of the selected teams and where it can be watched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMatch {
    pub game_id: GameId,
    pub team_home: String,
    pub team_away: String,
    pub available_on: Vec<MatchAvailability>,
}

/// Description of the dataset snapshot currently served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub source: String,
    pub games: usize,
    pub packages: usize,
    pub offers: usize,
    pub teams: usize,
    pub malformed_fields: usize,
    pub loaded_at: DateTime<Utc>,
}
