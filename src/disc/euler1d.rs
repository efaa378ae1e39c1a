//! Equation of state and variable transforms for the one-dimensional Euler
//! equations of a self-gravitating toy star embedded in vacuum.
//!
//! Every operation works on a batch of `N` cells. Conserved arrays have shape
//! `(N, 3)` with columns `[rho, rho v, rho (e + v^2 / 2)]`.
mod atmosphere;
mod convert;
mod eos;
mod flux;
mod source;
mod wave_speed;

use ndarray::Array1;
use serde::Deserialize;

use crate::error::ConfigError;

/// Number of conserved variables per cell.
pub const NEQ: usize = 3;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EulerParameters {
    pub gamma: f64,
    pub rho_atmosphere: f64,
    pub e_atmosphere: f64,
}
impl Default for EulerParameters {
    fn default() -> Self {
        Self {
            gamma: 2.0,
            rho_atmosphere: 1e-6,
            e_atmosphere: 1e-6,
        }
    }
}

/// Density, velocity and specific internal energy of every cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitives {
    pub rho: Array1<f64>,
    pub v: Array1<f64>,
    pub e: Array1<f64>,
}
impl Primitives {
    pub fn new(rho: Array1<f64>, v: Array1<f64>, e: Array1<f64>) -> Self {
        assert_eq!(rho.len(), v.len());
        assert_eq!(rho.len(), e.len());
        Self { rho, v, e }
    }
    pub fn len(&self) -> usize {
        self.rho.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }
}

/// Full primitive state derived from a conserved array.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveState {
    pub rho: Array1<f64>,
    pub v: Array1<f64>,
    pub e: Array1<f64>,
    pub p: Array1<f64>,
    pub cs: Array1<f64>,
}

/// Gamma-law gas with gamma fixed at 2 and a constant vacuum floor.
///
/// Parameters are read-only after construction, so one model can be shared
/// by any number of callers working on independent arrays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerToyStar {
    gamma: f64,
    rho_atmosphere: f64,
    e_atmosphere: f64,
}
impl EulerToyStar {
    pub fn new(params: &EulerParameters) -> Result<Self, ConfigError> {
        if params.gamma != 2.0 {
            return Err(ConfigError::UnsupportedGamma(params.gamma));
        }
        for (name, value) in [
            ("rho_atmosphere", params.rho_atmosphere),
            ("e_atmosphere", params.e_atmosphere),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidAtmosphere { name, value });
            }
        }
        Ok(Self {
            gamma: params.gamma,
            rho_atmosphere: params.rho_atmosphere,
            e_atmosphere: params.e_atmosphere,
        })
    }
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
    pub fn rho_atmosphere(&self) -> f64 {
        self.rho_atmosphere
    }
    pub fn e_atmosphere(&self) -> f64 {
        self.e_atmosphere
    }
}
impl Default for EulerToyStar {
    fn default() -> Self {
        let params = EulerParameters::default();
        Self {
            gamma: params.gamma,
            rho_atmosphere: params.rho_atmosphere,
            e_atmosphere: params.e_atmosphere,
        }
    }
}
