use serde::{Deserialize, Serialize};

use super::{GameId, PackageId};

/// A scheduled match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub team_home: String,
    pub team_away: String,
}

/// A streaming package with prices converted to major currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    /// Price per month on a monthly plan (e.g. 29.99)
    pub monthly_price: f64,
    /// Price per month when billed yearly
    pub yearly_price: f64,
}

/// Availability of one game on one package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offer {
    pub game_id: GameId,
    pub package_id: PackageId,
    pub live: bool,
    pub highlights: bool,
}

impl Offer {
    /// An offer covers its game when it is available live or on demand.
    /// An offer with both flags off shows nothing and is ignored.
    pub fn covers(&self) -> bool {
        self.live || self.highlights
    }
}
