#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TspLibProblem {
    /// Number of cities, as declared on the first line.
    pub cities: usize,
    /// Row-major distance matrix, one row per city.
    pub distances: Vec<Vec<u64>>,
    /// Optional open-path endpoints.
    pub endpoints: Option<TspLibEndpoints>,
}

/// Endpoint lines as written in the instance file (1-based city numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TspLibEndpoints {
    pub source: usize,
    pub destination: usize,
}
