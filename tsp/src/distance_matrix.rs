use tsp_lib_parser::structs::TspLibProblem;

/// Immutable square table of inter-city edge costs.
///
/// Constructed once from an instance, read-only afterwards. Lookups are
/// always in traversal direction; symmetry is an input assumption, not
/// something this type enforces.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    cities: usize,
    costs: Vec<u64>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<u64>>) -> Self {
        let cities = rows.len();
        let costs = rows.into_iter().flatten().collect();

        Self { cities, costs }
    }

    pub fn from_problem(problem: &TspLibProblem) -> Self {
        Self::new(problem.distances.clone())
    }

    pub fn cities(&self) -> usize {
        self.cities
    }

    /// Cost of the direct edge `from -> to`. Indices must be below
    /// [`cities`](Self::cities); anything else is a caller error.
    pub fn cost(&self, from: usize, to: usize) -> u64 {
        self.costs[from * self.cities + to]
    }

    /// Total cost of a route, summing every consecutive pair.
    pub fn route_cost(&self, route: &[usize]) -> u64 {
        route
            .windows(2)
            .map(|pair| self.cost(pair[0], pair[1]))
            .sum()
    }
}
