use ndarray::{Array2, ArrayView2, s};

/// Global Lax-Friedrichs (Rusanov) interface flux
/// `0.5 (f_l + f_r - alpha (q_r - q_l))` between neighbouring rows.
///
/// `q` and `f` include the ghost cells, so `N + 2` rows give `N + 1` faces.
pub fn lax_friedrichs(q: ArrayView2<f64>, f: ArrayView2<f64>, alpha: f64) -> Array2<f64> {
    let (ql, qr) = (q.slice(s![..-1, ..]), q.slice(s![1.., ..]));
    let (fl, fr) = (f.slice(s![..-1, ..]), f.slice(s![1.., ..]));
    0.5 * (&fl + &fr) - 0.5 * alpha * (&qr - &ql)
}
