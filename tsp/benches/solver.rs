use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp::distance_matrix::DistanceMatrix;
use tsp::solver::{solve, SolverOptions};
use tsp_lib_parser::parse_tsp_lib;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    group.sample_size(50);
    group.sampling_mode(criterion::SamplingMode::Flat);

    for file in ["easy_01_tsp.txt", "medium_tsp.txt"] {
        let contents = std::fs::read_to_string(format!("../instances/{file}")).unwrap();
        let problem = parse_tsp_lib(contents.as_str()).unwrap();
        let matrix = DistanceMatrix::from_problem(&problem);

        let configs = vec![
            SolverOptions {
                number_of_iterations: 20,
                tabu_list_size: 20,
                parallel: false,
            },
            SolverOptions {
                number_of_iterations: 200,
                tabu_list_size: 50,
                parallel: false,
            },
            SolverOptions {
                number_of_iterations: 20,
                tabu_list_size: 20,
                parallel: true,
            },
            SolverOptions {
                number_of_iterations: 200,
                tabu_list_size: 50,
                parallel: true,
            },
        ];

        for config in configs {
            group.bench_with_input(
                BenchmarkId::new(
                    format!(
                        "solver_{}",
                        if config.parallel { "parallel" } else { "single" }
                    ),
                    format!("{file}/{}", config.number_of_iterations),
                ),
                &config,
                |b, config| b.iter(|| solve(&matrix, 0, 0, config)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
