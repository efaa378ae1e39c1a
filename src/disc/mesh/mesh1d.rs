use ndarray::Array1;
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MeshParameters {
    pub cell_num: usize,
    pub left: f64,
    pub right: f64,
}

/// Uniform cells on `[left, right]`.
pub struct Mesh1d {
    pub cell_num: usize,
    pub left: f64,
    pub right: f64,
    pub dx: f64,
    pub cell_centers: Array1<f64>,
}
impl Mesh1d {
    pub fn new(cell_num: usize, left: f64, right: f64) -> Result<Self, ConfigError> {
        if cell_num == 0 || !(left.is_finite() && right.is_finite()) || right <= left {
            return Err(ConfigError::InvalidMesh {
                cell_num,
                left,
                right,
            });
        }
        let dx = (right - left) / cell_num as f64;
        let cell_centers = Array1::from_shape_fn(cell_num, |i| left + (i as f64 + 0.5) * dx);
        Ok(Self {
            cell_num,
            left,
            right,
            dx,
            cell_centers,
        })
    }
    pub fn from_params(params: &MeshParameters) -> Result<Self, ConfigError> {
        Self::new(params.cell_num, params.left, params.right)
    }
    pub fn length(&self) -> f64 {
        self.right - self.left
    }
}
