use std::{f64::consts::PI, path::Path};

use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::{
    disc::{
        euler1d::{EulerToyStar, Primitives},
        mesh::mesh1d::Mesh1d,
    },
    error::ToyStarResult,
    io::param_parser::ToyStarParamParser,
};

/// Hydrostatic gamma = 2 star in the potential x^2 / 2:
/// rho = max(rho_c - x^2, 0), e = rho / 4, so p = rho^2 / 4 and dp/dx = -rho x.
/// The velocity is seeded with `velocity_amplitude * sin(pi x / L)`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct InitialCondition {
    pub central_density: f64,
    pub velocity_amplitude: f64,
}
impl Default for InitialCondition {
    fn default() -> Self {
        Self {
            central_density: 1.0,
            velocity_amplitude: 0.0,
        }
    }
}

pub fn initialize_params_by_file(file_path: impl AsRef<Path>) -> ToyStarResult<ToyStarParamParser> {
    ToyStarParamParser::parse(file_path)
}
pub fn toy_star_primitives(mesh: &Mesh1d, ic: &InitialCondition) -> Primitives {
    let x = &mesh.cell_centers;
    let length = mesh.length();
    let rho: Array1<f64> = x.mapv(|x| (ic.central_density - x * x).max(0.0));
    let e = rho.mapv(|rho| 0.25 * rho);
    let v = x.mapv(|x| ic.velocity_amplitude * (PI * x / length).sin());
    Primitives::new(rho, v, e)
}
/// Floored initial primitives and the matching conserved array.
pub fn initialize_solution(
    model: &EulerToyStar,
    mesh: &Mesh1d,
    ic: &InitialCondition,
) -> (Primitives, Array2<f64>) {
    model.primitive_to_conserved(toy_star_primitives(mesh, ic))
}
