pub mod combinations;
pub mod coverage;
pub mod indexer;
pub mod loaders;
pub mod ranking;
pub mod schedule;
pub mod teams;

pub use indexer::DataIndex;
pub use ranking::{calculate_package_rankings, RankingConfig};
