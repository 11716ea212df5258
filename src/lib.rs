//! Recommends streaming packages for a set of followed teams.
//!
//! Packages are ranked by how many of the teams' games they show, and the
//! cheapest best-covering combinations of up to a few packages are searched.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
