use ndarray::{Array2, ArrayView2, s};
use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryType {
    /// Zero-gradient ghost cell.
    #[default]
    Outflow,
    /// Mirrored ghost cell with reversed momentum.
    Reflective,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryParameters {
    #[serde(default)]
    pub left: BoundaryType,
    #[serde(default)]
    pub right: BoundaryType,
}

/// Pads `q` with one ghost cell on each side, shape `(N + 2, 3)`.
pub fn extend_with_ghosts(q: ArrayView2<f64>, bc: &BoundaryParameters) -> Array2<f64> {
    let n = q.nrows();
    let mut q_ext = Array2::zeros((n + 2, q.ncols()));
    q_ext.slice_mut(s![1..n + 1, ..]).assign(&q);
    for (ghost, interior, boundary_type) in [(0, 0, bc.left), (n + 1, n - 1, bc.right)] {
        q_ext.row_mut(ghost).assign(&q.row(interior));
        if boundary_type == BoundaryType::Reflective {
            q_ext[[ghost, 1]] = -q_ext[[ghost, 1]];
        }
    }
    q_ext
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn outflow_copies_the_edge_cells() {
        let q = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let q_ext = extend_with_ghosts(q.view(), &BoundaryParameters::default());
        assert_eq!(q_ext.nrows(), 4);
        assert_eq!(q_ext.row(0), q.row(0));
        assert_eq!(q_ext.row(3), q.row(1));
        assert_eq!(q_ext.slice(s![1..3, ..]), q);
    }

    #[test]
    fn reflective_flips_momentum_only() {
        let q = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let bc = BoundaryParameters {
            left: BoundaryType::Reflective,
            right: BoundaryType::Outflow,
        };
        let q_ext = extend_with_ghosts(q.view(), &bc);
        assert_eq!(q_ext.row(0).to_vec(), vec![1.0, -2.0, 3.0]);
        assert_eq!(q_ext.row(3).to_vec(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn boundary_names_parse() {
        let bc: BoundaryParameters = serde_json::from_str(r#"{ "left": "reflective" }"#).unwrap();
        assert_eq!(bc.left, BoundaryType::Reflective);
        assert_eq!(bc.right, BoundaryType::Outflow);
    }
}
