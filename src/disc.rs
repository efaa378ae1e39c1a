pub mod boundary;
pub mod euler1d;
pub mod mesh;
pub mod riemann_solver;
