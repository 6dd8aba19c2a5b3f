use log::{debug, info, trace};

use crate::construction;
use crate::distance_matrix::DistanceMatrix;
use crate::neighborhood::neighborhood;
use crate::tabu_list::{simple_tabu_list::SimpleTabuList, TabuList};

use super::{OptimizedRoute, SolverOptions};

/// Outcome of a single tabu-search iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// The cheapest permitted candidate was committed and its exchange
    /// recorded in the tabu list.
    Moved { exchange: (usize, usize), cost: u64 },
    /// Every candidate was tabu, or none existed. The route and the tabu
    /// list are left untouched.
    Stalled,
}

/// Iterative route improvement with short-term exchange memory.
pub struct TabuSearch<'a> {
    matrix: &'a DistanceMatrix,
    route: Vec<usize>,
    best_route: Vec<usize>,
    best_cost: u64,
    tabu_list: SimpleTabuList,
    parallel: bool,
}

impl<'a> TabuSearch<'a> {
    /// Start a search at `route`, whose total cost must be `cost`.
    pub fn new(
        matrix: &'a DistanceMatrix,
        route: Vec<usize>,
        cost: u64,
        options: &SolverOptions,
    ) -> Self {
        Self {
            matrix,
            best_route: route.clone(),
            route,
            best_cost: cost,
            tabu_list: SimpleTabuList::new(options.tabu_list_size as usize),
            parallel: options.parallel,
        }
    }

    pub fn best_cost(&self) -> u64 {
        self.best_cost
    }

    pub fn best_route(&self) -> &[usize] {
        &self.best_route
    }

    /// Commit the cheapest non-tabu exchange, if any.
    ///
    /// A committed exchange may worsen the current route; that is how the
    /// search leaves local optima. The best-known route is a value snapshot
    /// and only ever replaced by a strictly cheaper one.
    pub fn step(&mut self) -> SearchStep {
        let candidates = neighborhood(&self.route, self.matrix, self.parallel);
        trace!("candidates: {candidates:?}");

        for candidate in candidates {
            let (a, b) = candidate.exchange;
            if !self.tabu_list.is_possible_move(a, b) {
                continue;
            }

            self.tabu_list.add_turn_to_tabu_list(a, b);
            self.route = candidate.route;

            if candidate.cost < self.best_cost {
                self.best_cost = candidate.cost;
                self.best_route = self.route.clone();
            }

            return SearchStep::Moved {
                exchange: (a, b),
                cost: candidate.cost,
            };
        }

        SearchStep::Stalled
    }

    /// Run the fixed iteration budget and return the best route seen.
    pub fn run(mut self, iterations: u32) -> OptimizedRoute {
        for iteration in 0..iterations {
            match self.step() {
                SearchStep::Moved { exchange, cost } => {
                    debug!("iteration {iteration}: exchanged {exchange:?}, cost {cost}");
                }
                SearchStep::Stalled => {
                    debug!("iteration {iteration}: every exchange is tabu, route unchanged");
                }
            }
        }

        OptimizedRoute {
            route: self.best_route,
            cost: self.best_cost,
        }
    }
}

/// Construct a greedy initial route and improve it with tabu search.
///
/// `start == end` solves the circuit form; the duplicated closing city is
/// removed from the returned route, so a circuit over `n` cities comes back
/// as `n` entries starting at `start`.
pub fn solve(
    matrix: &DistanceMatrix,
    start: usize,
    end: usize,
    options: &SolverOptions,
) -> OptimizedRoute {
    let (route, cost) = construction::nearest_neighbor(matrix, start, end);
    info!("initial route: {route:?}");
    info!("initial cost: {cost}");

    let search = TabuSearch::new(matrix, route, cost, options);
    let mut optimized = search.run(options.number_of_iterations);

    if start == end {
        optimized.route.pop();
    }

    info!("best route: {:?}", optimized.route);
    info!("best cost: {}", optimized.cost);

    optimized
}
