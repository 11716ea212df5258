use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{
    Datasets, Game, GameId, GameRecord, Offer, OfferRecord, Package, PackageId, PackageRecord,
};

/// Lookup structures built from the three flat datasets
///
/// Games and packages live in ordered maps so that anything iterating them
/// (rankings, schedules) sees the same order on every run.
#[derive(Debug, Clone, Default)]
pub struct DataIndex {
    pub games: BTreeMap<GameId, Game>,
    pub packages: BTreeMap<PackageId, Package>,
    /// Team name -> ids of the games it plays, home or away
    pub games_by_team: HashMap<String, HashSet<GameId>>,
    pub offers_by_package: HashMap<PackageId, HashSet<Offer>>,
    pub offers_by_game: HashMap<GameId, HashSet<Offer>>,
    /// Number of offer rows consumed
    pub offer_count: usize,
    /// Id and price fields that did not parse and were read as 0
    pub malformed_fields: usize,
}

impl DataIndex {
    /// Builds every index in one pass over each dataset.
    ///
    /// Unparseable ids and prices become 0 instead of failing; the count of
    /// such fields is kept in `malformed_fields`. A later record with an
    /// already-seen id replaces the earlier one.
    pub fn build(datasets: &Datasets) -> Self {
        let mut index = DataIndex::default();
        let mut parser = FieldParser::default();

        for record in &datasets.games {
            index.insert_game(record, &mut parser);
        }
        for record in &datasets.packages {
            index.insert_package(record, &mut parser);
        }
        for record in &datasets.offers {
            index.insert_offer(record, &mut parser);
        }

        index.malformed_fields = parser.malformed;
        index
    }

    fn insert_game(&mut self, record: &GameRecord, parser: &mut FieldParser) {
        let id = parser.integer(&record.id);

        let replaced = self.games.insert(
            id,
            Game {
                id,
                team_home: record.team_home.clone(),
                team_away: record.team_away.clone(),
            },
        );
        if let Some(previous) = replaced {
            for team in [&previous.team_home, &previous.team_away] {
                self.unlink_team(team, id);
            }
        }

        for team in [&record.team_home, &record.team_away] {
            self.games_by_team
                .entry(team.clone())
                .or_default()
                .insert(id);
        }
    }

    fn unlink_team(&mut self, team: &str, game_id: GameId) {
        if let Some(games) = self.games_by_team.get_mut(team) {
            games.remove(&game_id);
            if games.is_empty() {
                self.games_by_team.remove(team);
            }
        }
    }

    fn insert_package(&mut self, record: &PackageRecord, parser: &mut FieldParser) {
        let id = parser.integer(&record.id);
        let monthly_price = parser.price(&record.monthly_price_cents);
        let yearly_price = parser.price(&record.monthly_price_yearly_subscription_in_cents);

        self.packages.insert(
            id,
            Package {
                id,
                name: record.name.clone(),
                monthly_price,
                yearly_price,
            },
        );
    }

    fn insert_offer(&mut self, record: &OfferRecord, parser: &mut FieldParser) {
        let offer = Offer {
            game_id: parser.integer(&record.game_id),
            package_id: parser.integer(&record.streaming_package_id),
            live: flag(&record.live),
            highlights: flag(&record.highlights),
        };

        self.offers_by_game
            .entry(offer.game_id)
            .or_default()
            .insert(offer);
        self.offers_by_package
            .entry(offer.package_id)
            .or_default()
            .insert(offer);
        self.offer_count += 1;
    }

    /// Game ids the team plays in, if it appears in the dataset at all.
    /// A blank name matches no team.
    pub fn games_for_team(&self, team: &str) -> Option<&HashSet<GameId>> {
        if team.trim().is_empty() {
            return None;
        }
        self.games_by_team.get(team)
    }

    /// Number of named teams; a blank team field is not a team
    pub fn team_count(&self) -> usize {
        self.games_by_team
            .keys()
            .filter(|name| !name.trim().is_empty())
            .count()
    }

    /// Offers of a package; empty for packages without any
    pub fn offers_for_package(&self, package_id: PackageId) -> impl Iterator<Item = &Offer> {
        self.offers_by_package
            .get(&package_id)
            .into_iter()
            .flat_map(|offers| offers.iter())
    }

    /// Offers of a game; empty for games nobody carries
    pub fn offers_for_game(&self, game_id: GameId) -> impl Iterator<Item = &Offer> {
        self.offers_by_game
            .get(&game_id)
            .into_iter()
            .flat_map(|offers| offers.iter())
    }
}

/// Lossy text-to-number conversion that counts what it could not read
#[derive(Debug, Default)]
struct FieldParser {
    malformed: usize,
}

impl FieldParser {
    fn integer(&mut self, raw: &str) -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.malformed += 1;
                0
            }
        }
    }

    /// Converts integer cents to major currency units
    fn price(&mut self, raw_cents: &str) -> f64 {
        self.integer(raw_cents) as f64 / 100.0
    }
}

fn flag(raw: &str) -> bool {
    raw.trim() == "1"
}
