use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    disc::{boundary::BoundaryParameters, euler1d::EulerParameters, mesh::mesh1d::MeshParameters},
    error::ToyStarResult,
    initialization::InitialCondition,
    solver::SolverParameters,
};

/// Contents of a run file. `euler`, `boundary` and `initial_condition` may be
/// omitted and fall back to their defaults.
#[derive(Deserialize, Debug)]
pub struct ToyStarParamParser {
    #[serde(default)]
    pub euler: EulerParameters,
    pub solver: SolverParameters,
    pub mesh: MeshParameters,
    #[serde(default)]
    pub boundary: BoundaryParameters,
    #[serde(default)]
    pub initial_condition: InitialCondition,
}
impl ToyStarParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> ToyStarResult<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> ToyStarResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
