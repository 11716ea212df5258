use serde::{Deserialize, Serialize};

/// A team picked by the user. Only the name is used for matching; any other
/// fields the client sends along are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request body for rankings and schedule lookups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingRequest {
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl RankingRequest {
    /// Selected team names in request order
    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }
}

/// A team offered by the team search, with how many games it plays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub name: String,
    pub game_count: usize,
}
