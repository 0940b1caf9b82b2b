//! Run-metadata record
//!
//! Persists the effective parameters of a run as `params.csv` next to the
//! run output, including the derived density `rho = n / l^2`, so analysis
//! scripts can reconstruct what produced a set of step files.

use std::fs;
use std::path::Path;

use crate::output::sink::SinkError;
use crate::simulation::params::Parameters;

pub fn write_params_csv(dir: &Path, params: &Parameters) -> Result<(), SinkError> {
    fs::create_dir_all(dir)?;

    let mut wtr = csv::Writer::from_path(dir.join("params.csv"))?;
    wtr.write_record(["N", "L", "rho", "v", "eta", "r", "steps", "save_every"])?;
    wtr.write_record([
        params.n.to_string(),
        format!("{:.3}", params.l),
        format!("{:.3}", params.density()),
        format!("{:.3}", params.v),
        format!("{:.3}", params.eta),
        format!("{:.3}", params.r),
        params.steps.to_string(),
        params.save_every.to_string(),
    ])?;
    wtr.flush()?;
    Ok(())
}
