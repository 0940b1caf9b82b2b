//! Per-step CSV persistence
//!
//! Writes each saved step as `<out_dir>/sims/sim_<unix-ts>/steps/step_NNN.csv`
//! with a `id,x,y,vx,vy` header and six decimal places, one file per saved
//! step. The `sim_<unix-ts>` directory groups all steps of one run so
//! repeated runs never overwrite each other.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::output::sink::{SinkError, SnapshotRow, SnapshotSink};

pub struct CsvStepWriter {
    sim_dir: PathBuf,
}

impl CsvStepWriter {
    /// Create the run directory under `out_dir` and return a writer bound
    /// to it.
    pub fn new(out_dir: &Path) -> Result<Self, SinkError> {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let sim_dir = out_dir.join("sims").join(format!("sim_{ts}"));
        fs::create_dir_all(&sim_dir)?;
        Ok(Self { sim_dir })
    }

    /// Directory this run's steps are written into.
    pub fn sim_dir(&self) -> &Path {
        &self.sim_dir
    }
}

impl SnapshotSink for CsvStepWriter {
    fn write_step(&mut self, t: u64, rows: &[SnapshotRow]) -> Result<(), SinkError> {
        let steps_dir = self.sim_dir.join("steps");
        fs::create_dir_all(&steps_dir)?;

        let file = steps_dir.join(format!("step_{t:03}.csv"));
        let mut wtr = csv::Writer::from_path(file)?;

        wtr.write_record(["id", "x", "y", "vx", "vy"])?;
        for row in rows {
            wtr.write_record([
                row.id.to_string(),
                format!("{:.6}", row.x),
                format!("{:.6}", row.y),
                format!("{:.6}", row.vx),
                format!("{:.6}", row.vy),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
