use std::{fs, path::PathBuf};

use anyhow::Result;
use log::{info, trace};
use tsp::distance_matrix::DistanceMatrix;
use tsp::solver::{self, SolverOptions};
use tsp_lib_parser::parse_tsp_lib;

pub fn route(
    instance: PathBuf,
    output: PathBuf,
    start: Option<usize>,
    end: Option<usize>,
    options: SolverOptions,
) -> Result<()> {
    let contents = fs::read_to_string(instance)?;
    trace!("instance file contents: {contents}");

    let problem = parse_tsp_lib(contents.as_str())?;

    // Flags win over the instance's own endpoint lines.
    let endpoints = problem.endpoints;
    let start = start.or_else(|| endpoints.map(|e| e.source)).ok_or_else(|| {
        anyhow::anyhow!("no start city: pass --start or add endpoint lines to the instance")
    })?;
    let end = end
        .or_else(|| endpoints.map(|e| e.destination))
        .ok_or_else(|| {
            anyhow::anyhow!("no end city: pass --end or add endpoint lines to the instance")
        })?;

    let matrix = DistanceMatrix::from_problem(&problem);
    for city in [start, end] {
        anyhow::ensure!(
            (1..=matrix.cities()).contains(&city),
            "city {city} is outside 1..={}",
            matrix.cities()
        );
    }

    let optimized = solver::solve(&matrix, start - 1, end - 1, &options);

    super::write_route(&output, &optimized)?;
    info!("Wrote solution to: {output:?}");

    Ok(())
}
