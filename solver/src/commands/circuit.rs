use std::{fs, path::PathBuf};

use anyhow::Result;
use log::{info, trace};
use tsp::distance_matrix::DistanceMatrix;
use tsp::solver::{self, SolverOptions};
use tsp_lib_parser::parse_tsp_lib;

pub fn circuit(
    instance: PathBuf,
    output: PathBuf,
    start: usize,
    options: SolverOptions,
) -> Result<()> {
    let contents = fs::read_to_string(instance)?;
    trace!("instance file contents: {contents}");

    let problem = parse_tsp_lib(contents.as_str())?;
    let matrix = DistanceMatrix::from_problem(&problem);

    anyhow::ensure!(
        (1..=matrix.cities()).contains(&start),
        "start city {start} is outside 1..={}",
        matrix.cities()
    );
    let start = start - 1;

    let optimized = solver::solve(&matrix, start, start, &options);

    super::write_route(&output, &optimized)?;
    info!("Wrote solution to: {output:?}");

    Ok(())
}
