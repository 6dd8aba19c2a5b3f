use rayon::prelude::*;

use crate::distance_matrix::DistanceMatrix;

/// A route one interior exchange away from the route it was generated from.
///
/// Candidates are value copies; committing one never aliases the storage of
/// the route they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub route: Vec<usize>,
    /// Total cost of `route`, including its final edge.
    pub cost: u64,
    /// The two cities whose positions were exchanged.
    pub exchange: (usize, usize),
}

/// Every route reachable by exchanging two interior cities, cheapest first.
///
/// The first and last positions are fixed endpoints and never take part in
/// an exchange. Ties keep encounter order (position pairs, lexicographic),
/// so the result is deterministic. Returns an empty vector when the route
/// has fewer than two interior cities: no exchange is available and the
/// caller decides what a stalled iteration means.
pub fn neighborhood(route: &[usize], matrix: &DistanceMatrix, parallel: bool) -> Vec<Candidate> {
    if route.len() < 4 {
        return vec![];
    }

    let last = route.len() - 1;
    let exchanges: Vec<(usize, usize)> = (1..last)
        .flat_map(|a| (a + 1..last).map(move |b| (a, b)))
        .collect();

    let map_op = |(a, b): (usize, usize)| {
        let mut exchanged = route.to_vec();
        exchanged.swap(a, b);

        Candidate {
            cost: matrix.route_cost(&exchanged),
            exchange: (route[a], route[b]),
            route: exchanged,
        }
    };

    let mut candidates: Vec<Candidate> = if parallel {
        exchanges.into_par_iter().map(map_op).collect()
    } else {
        exchanges.into_iter().map(map_op).collect()
    };

    candidates.sort_by_key(|candidate| candidate.cost);

    candidates
}
