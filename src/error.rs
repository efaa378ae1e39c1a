use thiserror::Error;

/// Result type for the toy star driver.
pub type ToyStarResult<T> = Result<T, ToyStarError>;

/// Rejected model or driver configuration. Always fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unsupported adiabatic index {0}: the closure is specialized to gamma = 2")]
    UnsupportedGamma(f64),

    #[error("atmosphere floor `{name}` must be a positive finite number, got {value}")]
    InvalidAtmosphere { name: &'static str, value: f64 },

    #[error("invalid mesh: {cell_num} cells on [{left}, {right}]")]
    InvalidMesh { cell_num: usize, left: f64, right: f64 },

    #[error("cfl must lie in (0, 1], got {0}")]
    InvalidCfl(f64),
}

/// Errors surfaced by the driver around the kernel.
#[derive(Error, Debug)]
pub enum ToyStarError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("non-finite wave speed {speed} at step {step}, time {time}")]
    Diverged { step: usize, time: f64, speed: f64 },
}
