#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};
use tsp::solver::SolverOptions;

mod commands;

#[derive(Debug, Parser)]
/// TSP tabu-search solver
struct App {
    #[clap(flatten)]
    verbose: Verbosity,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a closed circuit through every city of an instance
    Circuit {
        instance: PathBuf,
        output: PathBuf,
        /// Starting city (1-based, as written in instance files)
        #[clap(long, default_value_t = 1)]
        start: usize,
        #[clap(long, default_value_t = 20)]
        iterations: u32,
        #[clap(long, default_value_t = 20)]
        tabu_size: u32,
        /// Evaluate candidate routes on a thread pool
        #[clap(long)]
        parallel: bool,
    },
    /// Find an open path between two cities of an instance
    Route {
        instance: PathBuf,
        output: PathBuf,
        /// Starting city (1-based); defaults to the instance's endpoint lines
        #[clap(long)]
        start: Option<usize>,
        /// Ending city (1-based); defaults to the instance's endpoint lines
        #[clap(long)]
        end: Option<usize>,
        #[clap(long, default_value_t = 20)]
        iterations: u32,
        #[clap(long, default_value_t = 20)]
        tabu_size: u32,
        /// Evaluate candidate routes on a thread pool
        #[clap(long)]
        parallel: bool,
    },
    /// Write a random symmetric instance file
    Generate {
        cities: usize,
        output: PathBuf,
        #[clap(long, default_value_t = 100)]
        max_distance: u64,
    },
}

fn main() {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Circuit {
            instance,
            output,
            start,
            iterations,
            tabu_size,
            parallel,
        } => commands::circuit(
            instance,
            output,
            start,
            SolverOptions {
                number_of_iterations: iterations,
                tabu_list_size: tabu_size,
                parallel,
            },
        ),
        Commands::Route {
            instance,
            output,
            start,
            end,
            iterations,
            tabu_size,
            parallel,
        } => commands::route(
            instance,
            output,
            start,
            end,
            SolverOptions {
                number_of_iterations: iterations,
                tabu_list_size: tabu_size,
                parallel,
            },
        ),
        Commands::Generate {
            cities,
            output,
            max_distance,
        } => commands::generate(cities, output, max_distance),
    } {
        error!("An error occurred: {}", err);
    }
}
