use crate::models::{MatchAvailability, ScheduledMatch};

use super::coverage::target_games;
use super::indexer::DataIndex;

/// Lists the selected teams' games in id order, each with the packages that
/// show it live or on demand.
///
/// Games no package carries are still listed, with nothing under
/// `available_on`. Offers pointing at unknown packages are skipped.
pub fn match_schedule<'a, I>(index: &DataIndex, teams: I) -> Vec<ScheduledMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut game_ids: Vec<_> = target_games(index, teams).into_iter().collect();
    game_ids.sort_unstable();

    game_ids
        .into_iter()
        .filter_map(|game_id| index.games.get(&game_id))
        .map(|game| {
            let mut available_on: Vec<MatchAvailability> = index
                .offers_for_game(game.id)
                .filter(|offer| offer.covers())
                .filter_map(|offer| {
                    index.packages.get(&offer.package_id).map(|package| MatchAvailability {
                        package_id: package.id,
                        package_name: package.name.clone(),
                        live: offer.live,
                        highlights: offer.highlights,
                    })
                })
                .collect();
            available_on.sort_by(|a, b| {
                a.package_id
                    .cmp(&b.package_id)
                    .then_with(|| b.live.cmp(&a.live))
                    .then_with(|| b.highlights.cmp(&a.highlights))
            });

            ScheduledMatch {
                game_id: game.id,
                team_home: game.team_home.clone(),
                team_away: game.team_away.clone(),
                available_on,
            }
        })
        .collect()
}
