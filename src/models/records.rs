use serde::{Deserialize, Serialize};

/// Raw row of the game dataset, exactly as the loader read it.
///
/// Every field is text. Absent columns deserialize to an empty string so a
/// short or partial row never aborts a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub team_home: String,
    #[serde(default)]
    pub team_away: String,
}

/// Raw row of the streaming package dataset. Prices are integer cent counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monthly_price_cents: String,
    #[serde(default)]
    pub monthly_price_yearly_subscription_in_cents: String,
}

/// Raw row of the offer dataset linking one game to one package.
///
/// `live` and `highlights` hold the literal text "0" or "1".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub streaming_package_id: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub highlights: String,
}

/// The three flat collections a loader hands to the indexer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub games: Vec<GameRecord>,
    pub packages: Vec<PackageRecord>,
    pub offers: Vec<OfferRecord>,
}
