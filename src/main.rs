use std::{env, process::ExitCode};

use ndarray_stats::QuantileExt;
use toy_star::{
    disc::{euler1d::EulerToyStar, mesh::mesh1d::Mesh1d},
    error::ToyStarResult,
    initialization::{initialize_params_by_file, initialize_solution},
    solver::Solver,
};
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let file_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "inputs/toystar.json".to_string());
    match run(&file_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(file_path: &str) -> ToyStarResult<()> {
    let params = initialize_params_by_file(file_path)?;
    let model = EulerToyStar::new(&params.euler)?;
    let mesh = Mesh1d::from_params(&params.mesh)?;
    let (_, solutions) = initialize_solution(&model, &mesh, &params.initial_condition);
    let mut solver = Solver::new(&model, &mesh, params.boundary, &params.solver)?;
    let solutions = solver.solve(solutions)?;
    let state = model.conserved_to_primitive(solutions.view());
    info!(
        max_density = state.rho.max().copied().unwrap_or(f64::NAN),
        max_wave_speed = model.max_wave_speed(solutions.view()),
        "final state"
    );
    Ok(())
}
