use ndarray::{Array1, ArrayView1, Zip};

use super::EulerToyStar;

impl EulerToyStar {
    /// Ideal-gas closure p = (gamma - 1) rho e.
    ///
    /// No floors are applied here: callers pass densities and energies that
    /// already satisfy the atmosphere, otherwise p may come out negative.
    pub fn p_from_eos(&self, rho: ArrayView1<f64>, e: ArrayView1<f64>) -> Array1<f64> {
        let gm1 = self.gamma - 1.0;
        Zip::from(&rho).and(&e).map_collect(|&rho, &e| gm1 * rho * e)
    }
    /// c_s = sqrt(gamma p / rho).
    pub fn sound_speed(&self, rho: ArrayView1<f64>, p: ArrayView1<f64>) -> Array1<f64> {
        let gamma = self.gamma;
        Zip::from(&rho)
            .and(&p)
            .map_collect(|&rho, &p| (gamma * p / rho).sqrt())
    }
}
