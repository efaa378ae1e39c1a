use std::{fs, path::PathBuf};

use ndarray::{Array2, ArrayView2, s};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    disc::{
        boundary::{BoundaryParameters, extend_with_ghosts},
        euler1d::EulerToyStar,
        mesh::mesh1d::Mesh1d,
        riemann_solver::lax_friedrichs,
    },
    error::{ConfigError, ToyStarError, ToyStarResult},
    io::write_to_csv::write_to_csv,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SolverParameters {
    pub cfl: f64,
    pub final_time: f64,
    pub final_step: usize,
    #[serde(default)]
    pub output_interval: Option<usize>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Finite-volume driver: Lax-Friedrichs fluxes, gravity source and a
/// two-stage SSP Runge-Kutta update, all through the kernel in `euler1d`.
pub struct Solver<'a> {
    pub current_time: f64,
    pub current_step: usize,
    model: &'a EulerToyStar,
    mesh: &'a Mesh1d,
    boundary: BoundaryParameters,
    solver_param: &'a SolverParameters,
}
impl<'a> Solver<'a> {
    pub fn new(
        model: &'a EulerToyStar,
        mesh: &'a Mesh1d,
        boundary: BoundaryParameters,
        solver_param: &'a SolverParameters,
    ) -> Result<Self, ConfigError> {
        if !(solver_param.cfl > 0.0 && solver_param.cfl <= 1.0) {
            return Err(ConfigError::InvalidCfl(solver_param.cfl));
        }
        Ok(Self {
            current_time: 0.0,
            current_step: 0,
            model,
            mesh,
            boundary,
            solver_param,
        })
    }
    /// dq/dt = -(F_{i+1/2} - F_{i-1/2}) / dx + s(q, x)
    pub fn compute_residuals(&self, q: ArrayView2<f64>) -> Array2<f64> {
        let q_ext = extend_with_ghosts(q, &self.boundary);
        let f_ext = self.model.flux(q_ext.view());
        let alpha = self.model.max_wave_speed(q_ext.view());
        let face_flux = lax_friedrichs(q_ext.view(), f_ext.view(), alpha);
        let mut residuals = self.model.source(q, self.mesh.cell_centers.view());
        let flux_diff = &face_flux.slice(s![1.., ..]) - &face_flux.slice(s![..-1, ..]);
        residuals.scaled_add(-1.0 / self.mesh.dx, &flux_diff);
        residuals
    }
    fn compute_time_step(&self, q: ArrayView2<f64>) -> ToyStarResult<f64> {
        let speed = self.model.max_wave_speed(q);
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ToyStarError::Diverged {
                step: self.current_step,
                time: self.current_time,
                speed,
            });
        }
        let mut dt = self.solver_param.cfl * self.mesh.dx / speed;
        if self.current_time + dt > self.solver_param.final_time {
            dt = self.solver_param.final_time - self.current_time;
        }
        Ok(dt)
    }
    /// One SSP-RK2 step. The atmosphere is re-imposed on the conserved state
    /// after each stage.
    pub fn advance(&self, q: ArrayView2<f64>, dt: f64) -> Array2<f64> {
        let mut q1 = q.to_owned();
        q1.scaled_add(dt, &self.compute_residuals(q));
        let q1 = self.model.reset_atmosphere(q1.view());
        let mut q2 = q1.clone();
        q2.scaled_add(dt, &self.compute_residuals(q1.view()));
        let q2 = 0.5 * (&q + &q2);
        self.model.reset_atmosphere(q2.view())
    }
    pub fn solve(&mut self, mut q: Array2<f64>) -> ToyStarResult<Array2<f64>> {
        info!(
            cells = self.mesh.cell_num,
            final_time = self.solver_param.final_time,
            final_step = self.solver_param.final_step,
            "starting toy star run"
        );
        self.write_output(q.view(), &self.current_step.to_string())?;
        while self.current_step < self.solver_param.final_step
            && self.current_time < self.solver_param.final_time
        {
            let dt = self.compute_time_step(q.view())?;
            q = self.advance(q.view(), dt);
            self.current_time += dt;
            self.current_step += 1;
            debug!(step = self.current_step, time = self.current_time, dt, "step");
            if let Some(interval) = self.solver_param.output_interval {
                if interval > 0 && self.current_step % interval == 0 {
                    info!(step = self.current_step, time = self.current_time, "writing output");
                    self.write_output(q.view(), &self.current_step.to_string())?;
                }
            }
        }
        if self.current_time < self.solver_param.final_time {
            warn!(
                step = self.current_step,
                time = self.current_time,
                final_time = self.solver_param.final_time,
                "step limit reached before final time"
            );
        }
        self.write_output(q.view(), "final")?;
        info!(step = self.current_step, time = self.current_time, "run finished");
        Ok(q)
    }
    fn write_output(&self, q: ArrayView2<f64>, tag: &str) -> ToyStarResult<()> {
        if let Some(dir) = &self.solver_param.output_dir {
            fs::create_dir_all(dir)?;
            let state = self.model.conserved_to_primitive(q);
            write_to_csv(&state, self.mesh, dir.join(format!("solutions_{tag}.csv")))?;
        }
        Ok(())
    }
}
