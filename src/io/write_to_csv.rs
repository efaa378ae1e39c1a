use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::disc::{euler1d::PrimitiveState, mesh::mesh1d::Mesh1d};

#[derive(Serialize)]
struct PointData {
    x: f64,
    rho: f64,
    v: f64,
    e: f64,
    p: f64,
    cs: f64,
}

pub fn write_to_csv(
    state: &PrimitiveState,
    mesh: &Mesh1d,
    filename: impl AsRef<Path>,
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_path(filename)?;
    for (icell, &x) in mesh.cell_centers.iter().enumerate() {
        let data = PointData {
            x,
            rho: state.rho[icell],
            v: state.v[icell],
            e: state.e[icell],
            p: state.p[icell],
            cs: state.cs[icell],
        };
        writer.serialize(data)?;
    }
    writer.flush()?;
    Ok(())
}
