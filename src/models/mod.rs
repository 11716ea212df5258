pub mod package;
pub mod ranking;
pub mod records;
pub mod team;

pub use package::{Game, Offer, Package};
pub use ranking::{
    Combination, DatasetSummary, MatchAvailability, PackageStats, RankingResult, ScheduledMatch,
};
pub use records::{Datasets, GameRecord, OfferRecord, PackageRecord};
pub use team::{RankingRequest, Team, TeamSummary};

/// Numeric identifier of a game, parsed from the dataset's text id
pub type GameId = i64;

/// Numeric identifier of a streaming package
pub type PackageId = i64;

#[cfg(test)]
mod tests {
    use super::*;

    fn sky_stats() -> PackageStats {
        PackageStats {
            id: 1,
            name: "Sky".to_string(),
            monthly_price: 10.0,
            yearly_price: 8.0,
            coverage: 100.0,
            covered_games: 1,
            live_games: 1,
            on_demand_games: 0,
            games_per_euro: 0.125,
        }
    }

    #[test]
    fn test_package_stats_serialize_camel_case() {
        let json = serde_json::to_value(sky_stats()).unwrap();
        assert_eq!(json["yearlyPrice"], 8.0);
        assert_eq!(json["coveredGames"], 1);
        assert_eq!(json["onDemandGames"], 0);
        assert_eq!(json["gamesPerEuro"], 0.125);
    }

    #[test]
    fn test_ranking_result_serializes_total_games() {
        let result = RankingResult {
            packages: vec![sky_stats()],
            combinations: vec![Combination {
                packages: vec![sky_stats()],
                coverage: 100.0,
                total_price: 8.0,
                covered_games: 1,
            }],
            total_games: 1,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalGames"], 1);
        assert_eq!(json["combinations"][0]["totalPrice"], 8.0);
        assert_eq!(json["combinations"][0]["packages"][0]["name"], "Sky");
    }

    #[test]
    fn test_records_tolerate_missing_fields() {
        let record: OfferRecord = serde_json::from_str(r#"{"game_id":"7"}"#).unwrap();
        assert_eq!(record.game_id, "7");
        assert_eq!(record.streaming_package_id, "");
        assert_eq!(record.live, "");
    }
}
