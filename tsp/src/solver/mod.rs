pub mod tabu_search;

pub use tabu_search::{solve, SearchStep, TabuSearch};

/// Search parameters.
///
/// The iteration budget is the only termination condition; there is no
/// convergence-based early exit.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    pub number_of_iterations: u32,
    pub tabu_list_size: u32,
    /// Evaluate candidate routes on the rayon thread pool. Ordering, and
    /// with it the search trajectory, is identical either way.
    pub parallel: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            number_of_iterations: 20,
            tabu_list_size: 20,
            parallel: false,
        }
    }
}

/// Best route found within the iteration budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedRoute {
    pub route: Vec<usize>,
    pub cost: u64,
}
