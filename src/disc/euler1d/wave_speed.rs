use ndarray::ArrayView2;
use ndarray_stats::{QuantileExt, errors::MinMaxError};

use super::{EulerToyStar, PrimitiveState};

impl EulerToyStar {
    /// `max |v| + max |c_s|` over all cells.
    ///
    /// The two maxima are taken independently, which bounds the largest
    /// characteristic speed `|v| + c_s` from above. NaN anywhere in the state
    /// yields NaN.
    pub fn max_wave_speed(&self, q: ArrayView2<f64>) -> f64 {
        let PrimitiveState { v, cs, .. } = self.conserved_to_primitive(q);
        abs_max(v.mapv(f64::abs).max()) + abs_max(cs.mapv(f64::abs).max())
    }
}

fn abs_max(max: Result<&f64, MinMaxError>) -> f64 {
    match max {
        Ok(&m) => m,
        Err(MinMaxError::EmptyInput) => 0.0,
        Err(MinMaxError::UndefinedOrder) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn maxima_are_taken_independently() {
        let model = EulerToyStar::default();
        // cell 0: rho = 1, v = -3, e = 0.5  =>  cs = 1
        // cell 1: rho = 1, v = 0,  e = 2    =>  cs = 2
        let q = array![[1.0, -3.0, 5.0], [1.0, 0.0, 2.0]];
        let lambda = model.max_wave_speed(q.view());
        assert_relative_eq!(lambda, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn atmosphere_still_has_a_sound_speed() {
        let model = EulerToyStar::default();
        let q = Array2::zeros((4, 3));
        let lambda = model.max_wave_speed(q.view());
        assert_relative_eq!(lambda, (2.0 * 1e-6_f64).sqrt(), max_relative = 1e-6);
    }

    #[test]
    fn nan_state_is_reported() {
        let model = EulerToyStar::default();
        let q = array![[1.0, f64::NAN, 1.0]];
        assert!(model.max_wave_speed(q.view()).is_nan());
    }

    #[test]
    fn empty_state_has_zero_speed() {
        let model = EulerToyStar::default();
        let q = Array2::<f64>::zeros((0, 3));
        assert_eq!(model.max_wave_speed(q.view()), 0.0);
    }
}
