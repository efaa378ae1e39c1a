use ndarray::{Array2, ArrayView2, Zip};

use super::{EulerToyStar, NEQ, PrimitiveState, Primitives};

impl EulerToyStar {
    /// Floors the primitives and builds `[rho, rho v, rho (e + v^2 / 2)]` from
    /// the result. The floored primitives are returned alongside the conserved
    /// array.
    pub fn primitive_to_conserved(&self, prims: Primitives) -> (Primitives, Array2<f64>) {
        let prims = self.enforce_atmosphere(prims);
        let mut q = Array2::zeros((prims.len(), NEQ));
        Zip::from(q.rows_mut())
            .and(&prims.rho)
            .and(&prims.v)
            .and(&prims.e)
            .for_each(|mut q, &rho, &v, &e| {
                q[0] = rho;
                q[1] = rho * v;
                q[2] = rho * (e + 0.5 * v * v);
            });
        (prims, q)
    }
    /// Conserved density pass, primitive derivation, energy pass, closure.
    /// Out-of-range input is floored silently; `q` itself is left untouched.
    pub fn conserved_to_primitive(&self, q: ArrayView2<f64>) -> PrimitiveState {
        let q = self.floor_conserved_density(q);
        self.derive_primitives(q.view())
    }
    /// Rebuilds `q` from its floored primitives so the conserved state itself
    /// satisfies the atmosphere.
    pub fn reset_atmosphere(&self, q: ArrayView2<f64>) -> Array2<f64> {
        let PrimitiveState { rho, v, e, .. } = self.conserved_to_primitive(q);
        self.primitive_to_conserved(Primitives { rho, v, e }).1
    }
    /// Steps after the conserved density pass. `q` must already be floored.
    pub(super) fn derive_primitives(&self, q: ArrayView2<f64>) -> PrimitiveState {
        let rho = q.column(0).to_owned();
        let v = &q.column(1) / &rho;
        let e = Zip::from(q.column(2))
            .and(&rho)
            .and(&v)
            .map_collect(|&energy, &rho, &v| energy / rho - 0.5 * v * v);
        let Primitives { rho, v, e } = self.floor_energy(Primitives { rho, v, e });
        let p = self.p_from_eos(rho.view(), e.view());
        let cs = self.sound_speed(rho.view(), p.view());
        PrimitiveState { rho, v, e, p, cs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    fn model() -> EulerToyStar {
        EulerToyStar::default()
    }

    #[test]
    fn two_cell_scenario() {
        let prims = Primitives::new(array![1.0, 1e-8], array![2.0, 5.0], array![1.0, 1e-9]);
        let (floored, q) = model().primitive_to_conserved(prims);
        assert_eq!(floored.rho, array![1.0, 1e-6]);
        assert_eq!(floored.v, array![2.0, 0.0]);
        assert_eq!(floored.e, array![1.0, 1e-6]);
        assert_eq!(q.row(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(q[[1, 0]], 1e-6);
        assert_eq!(q[[1, 1]], 0.0);
        assert_relative_eq!(q[[1, 2]], 1e-12, max_relative = 1e-12);

        let state = model().conserved_to_primitive(q.view());
        assert_eq!(state.rho[0], 1.0);
        assert_eq!(state.v[0], 2.0);
        assert_eq!(state.e[0], 1.0);
        assert_eq!(state.rho[1], 1e-6);
        assert_eq!(state.v[1], 0.0);
        assert_relative_eq!(state.e[1], 1e-6, max_relative = 1e-12);
    }

    #[test]
    fn round_trip_away_from_the_floor() {
        let n = 16;
        let rho = Array1::from_shape_fn(n, |i| 0.5 + i as f64 * 0.25);
        let v = Array1::from_shape_fn(n, |i| (i as f64 - 7.5) * 0.3);
        let e = Array1::from_shape_fn(n, |i| 0.1 + (i as f64).sqrt());
        let (_, q) = model().primitive_to_conserved(Primitives::new(rho.clone(), v.clone(), e.clone()));
        let state = model().conserved_to_primitive(q.view());
        for i in 0..n {
            assert_relative_eq!(state.rho[i], rho[i], max_relative = 1e-12);
            assert_relative_eq!(state.v[i], v[i], epsilon = 1e-12);
            assert_relative_eq!(state.e[i], e[i], max_relative = 1e-12);
        }
    }

    #[test]
    fn conserved_input_is_not_mutated() {
        let q = array![[1e-9, 5.0, -1.0], [1.0, 0.0, 1.0]];
        let before = q.clone();
        let _ = model().conserved_to_primitive(q.view());
        assert_eq!(q, before);
    }

    #[test]
    fn floors_hold_after_conversion() {
        let q = array![
            [1e-9, 5.0, 1.0],
            [1e-13, 5.0, -1.0],
            [2.0, 4.0, 1.0],
            [-1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [3.0, -1.0, 6.0]
        ];
        let state = model().conserved_to_primitive(q.view());
        for i in 0..q.nrows() {
            assert!(state.rho[i] >= 1e-6);
            assert!(state.e[i] >= 1e-6);
            assert!(state.p[i] >= 0.0);
            assert!(state.cs[i] >= 0.0 && state.cs[i].is_finite());
        }
        // below the density floor: no momentum survives
        assert_eq!(state.v[0], 0.0);
        assert_eq!(state.v[1], 0.0);
        assert_eq!(state.v[3], 0.0);
        // kinetic energy exceeds total energy: energy floor fires
        assert_eq!(state.v[2], 0.0);
        assert_eq!(state.rho[2], 1e-6);
        assert_eq!(state.v[5], -1.0 / 3.0);
    }

    #[test]
    fn dense_cell_with_large_energy_keeps_it_after_density_floor() {
        let q = array![[1e-8, 3.0, 1.0]];
        let state = model().conserved_to_primitive(q.view());
        assert_eq!(state.rho[0], 1e-6);
        assert_eq!(state.v[0], 0.0);
        assert_relative_eq!(state.e[0], 1e6, max_relative = 1e-12);
    }

    #[test]
    fn reset_atmosphere_is_idempotent() {
        let q = array![
            [1e-9, 5.0, 1.0],
            [2.0, 4.0, 1.0],
            [1.0, 0.5, 2.0],
            [0.0, 0.0, 0.0]
        ];
        let once = model().reset_atmosphere(q.view());
        let twice = model().reset_atmosphere(once.view());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12, epsilon = 1e-15);
        }
        assert_eq!(once[[1, 0]], 1e-6);
        assert_eq!(once[[1, 1]], 0.0);
    }
}
