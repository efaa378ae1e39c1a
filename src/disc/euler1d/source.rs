use ndarray::{Array2, ArrayView1, ArrayView2, Zip};

use super::{EulerToyStar, PrimitiveState};

impl EulerToyStar {
    /// Gravitational source `[0, -rho x, -rho v x]`, where `x` is the local
    /// gravitational acceleration coefficient of each cell.
    pub fn source(&self, q: ArrayView2<f64>, x: ArrayView1<f64>) -> Array2<f64> {
        let PrimitiveState { rho, v, .. } = self.conserved_to_primitive(q);
        let mut s = Array2::zeros(q.raw_dim());
        Zip::from(s.rows_mut())
            .and(&rho)
            .and(&v)
            .and(&x)
            .for_each(|mut s, &rho, &v, &x| {
                s[1] = -rho * x;
                s[2] = -rho * v * x;
            });
        s
    }
}
