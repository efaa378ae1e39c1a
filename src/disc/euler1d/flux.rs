use ndarray::{Array2, ArrayView2, Zip};

use super::{EulerToyStar, PrimitiveState};

impl EulerToyStar {
    /// Physical flux `[S, S v + p, (E + p) v]`.
    ///
    /// Primitives are re-derived from `q` on every call, never cached, so the
    /// flux always sees a freshly floored state. `S` and `E` are taken after
    /// the conserved density pass.
    pub fn flux(&self, q: ArrayView2<f64>) -> Array2<f64> {
        let q = self.floor_conserved_density(q);
        let PrimitiveState { v, p, .. } = self.derive_primitives(q.view());
        let mut f = Array2::zeros(q.raw_dim());
        Zip::from(f.rows_mut())
            .and(q.rows())
            .and(&v)
            .and(&p)
            .for_each(|mut f, q, &v, &p| {
                f[0] = q[1];
                f[1] = q[1] * v + p;
                f[2] = (q[2] + p) * v;
            });
        f
    }
}
