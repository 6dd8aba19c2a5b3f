use std::path::Path;

use anyhow::Result;
use tsp::solver::OptimizedRoute;

mod circuit;
mod generate;
mod route;

pub use circuit::circuit;
pub use generate::generate;
pub use route::route;

/// Solution file layout: route length, comma-separated 1-based city
/// numbers, total cost.
pub(crate) fn write_route(path: &Path, optimized: &OptimizedRoute) -> Result<()> {
    let cities: Vec<String> = optimized
        .route
        .iter()
        .map(|city| (city + 1).to_string())
        .collect();

    let contents = format!(
        "{}\n{}\n{}\n",
        optimized.route.len(),
        cities.join(", "),
        optimized.cost
    );
    std::fs::write(path, contents)?;

    Ok(())
}
