//! Bounded search for the package subsets that cover the most games.
//!
//! Every size from 1 up to the configured maximum is searched exhaustively,
//! which costs C(n, k) union operations for n candidate packages. That is
//! cheap for k <= 3 even with several dozen packages but grows quickly with
//! k, which is why the size is capped. The result is the best subset of each
//! size, not a global optimum over all sizes.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{Combination, GameId};

use super::coverage::{coverage_percent, PackageCoverage};

/// Lexicographic "choose k of n" over indices `0..n`.
///
/// Yields nothing when `k` is 0 or larger than `n`. Cloning an iterator, or
/// creating a new one, restarts the sequence.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices.clone();
        let k = self.indices.len();

        // Find the rightmost index that can still move right
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Best subset seen so far during a size's enumeration
struct Candidate {
    members: Vec<usize>,
    covered: usize,
    total_price: f64,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        self.covered > other.covered
            || (self.covered == other.covered && self.total_price < other.total_price)
    }
}

/// Finds the subset of exactly `size` packages with the highest coverage,
/// breaking ties by lower total price and then by enumeration order.
///
/// `packages` should already exclude packages without coverage.
pub fn best_combination_of_size(
    packages: &[&PackageCoverage],
    total_games: usize,
    size: usize,
) -> Option<Combination> {
    let mut best: Option<Candidate> = None;
    let mut evaluated = 0usize;

    for members in Combinations::new(packages.len(), size) {
        evaluated += 1;

        let mut covered: HashSet<GameId> = HashSet::new();
        let mut total_price = 0.0;
        for &i in &members {
            covered.extend(packages[i].covered.iter().copied());
            total_price += packages[i].stats.yearly_price;
        }

        let candidate = Candidate {
            members,
            covered: covered.len(),
            total_price,
        };

        if best.as_ref().map_or(true, |b| candidate.beats(b)) {
            best = Some(candidate);
        }
    }

    tracing::debug!(size, evaluated, "Evaluated package combinations");

    best.map(|candidate| Combination {
        packages: candidate
            .members
            .iter()
            .map(|&i| packages[i].stats.clone())
            .collect(),
        coverage: coverage_percent(candidate.covered, total_games),
        total_price: candidate.total_price,
        covered_games: candidate.covered,
    })
}

/// Best combination for every size from 1 to `max_size`.
///
/// Packages with zero coverage are dropped first, and sizes with no possible
/// subset are left out. The list is ordered by coverage (highest first), then
/// fewer packages, then lower total price.
pub fn find_best_combinations(
    ranked: &[PackageCoverage],
    total_games: usize,
    max_size: usize,
) -> Vec<Combination> {
    let candidates: Vec<&PackageCoverage> = ranked
        .iter()
        .filter(|p| p.stats.coverage > 0.0)
        .collect();

    let mut combinations: Vec<Combination> = (1..=max_size)
        .filter_map(|size| best_combination_of_size(&candidates, total_games, size))
        .collect();

    combinations.sort_by(compare_combinations);
    combinations
}

fn compare_combinations(a: &Combination, b: &Combination) -> Ordering {
    b.covered_games
        .cmp(&a.covered_games)
        .then_with(|| a.size().cmp(&b.size()))
        .then_with(|| a.total_price.total_cmp(&b.total_price))
}
