//! Vacuum floor passes. Each pass is a pure function of a full snapshot; the
//! conversions compose them in a fixed order and the second pass sees the
//! output of the first.
use ndarray::{Array2, ArrayView2, Zip};
use tracing::debug;

use super::{EulerToyStar, Primitives};

impl EulerToyStar {
    /// Cells with rho < rho_atm become static atmosphere.
    pub fn floor_density(&self, prims: Primitives) -> Primitives {
        let (rho_atm, e_atm) = (self.rho_atmosphere, self.e_atmosphere);
        let Primitives { mut rho, mut v, mut e } = prims;
        let mut floored = 0usize;
        Zip::from(&mut rho)
            .and(&mut v)
            .and(&mut e)
            .for_each(|rho, v, e| {
                if *rho < rho_atm {
                    *v = 0.0;
                    *e = e_atm;
                    *rho = rho_atm;
                    floored += 1;
                }
            });
        if floored > 0 {
            debug!(floored, "density floor applied");
        }
        Primitives { rho, v, e }
    }
    /// Cells with e < e_atm become static atmosphere.
    pub fn floor_energy(&self, prims: Primitives) -> Primitives {
        let (rho_atm, e_atm) = (self.rho_atmosphere, self.e_atmosphere);
        let Primitives { mut rho, mut v, mut e } = prims;
        let mut floored = 0usize;
        Zip::from(&mut rho)
            .and(&mut v)
            .and(&mut e)
            .for_each(|rho, v, e| {
                if *e < e_atm {
                    *v = 0.0;
                    *rho = rho_atm;
                    *e = e_atm;
                    floored += 1;
                }
            });
        if floored > 0 {
            debug!(floored, "energy floor applied");
        }
        Primitives { rho, v, e }
    }
    /// Density pass followed by energy pass.
    pub fn enforce_atmosphere(&self, prims: Primitives) -> Primitives {
        self.floor_energy(self.floor_density(prims))
    }
    /// Density pass on conserved variables.
    ///
    /// Momentum is zeroed where rho < rho_atm, but total energy is clamped to
    /// e_atm * rho_atm only where rho < e_atm * rho_atm. The two thresholds
    /// differ and this is kept on purpose; the energy pass after the
    /// primitive derivation catches whatever the narrower clamp lets through.
    pub fn floor_conserved_density(&self, q: ArrayView2<f64>) -> Array2<f64> {
        let rho_atm = self.rho_atmosphere;
        let energy_floor = self.e_atmosphere * self.rho_atmosphere;
        let mut q = q.to_owned();
        let mut floored = 0usize;
        for mut row in q.rows_mut() {
            if row[0] < rho_atm {
                row[1] = 0.0;
            }
            if row[0] < energy_floor {
                row[2] = energy_floor;
            }
            if row[0] < rho_atm {
                row[0] = rho_atm;
                floored += 1;
            }
        }
        if floored > 0 {
            debug!(floored, "conserved density floor applied");
        }
        q
    }
}
