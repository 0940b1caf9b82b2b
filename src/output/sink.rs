//! Snapshot sink boundary
//!
//! The runner emits one snapshot per saved step to an injected
//! [`SnapshotSink`]; everything downstream of that call (files, formats,
//! plotting pipelines) is a collaborator outside the engine. A failed write
//! aborts the run; the engine never retries or drops a snapshot silently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// One particle's saved state: position plus velocity derived from the
/// heading at the configured speed.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Receives, once per saved step, the rows for every particle in ascending
/// id order. Step 0 is always delivered before the stepping loop starts.
pub trait SnapshotSink {
    fn write_step(&mut self, t: u64, rows: &[SnapshotRow]) -> Result<(), SinkError>;
}

/// Sink that keeps every snapshot in memory. Used by tests and benchmarks.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub steps: Vec<(u64, Vec<SnapshotRow>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the most recently written step.
    pub fn last(&self) -> Option<&(u64, Vec<SnapshotRow>)> {
        self.steps.last()
    }
}

impl SnapshotSink for MemorySink {
    fn write_step(&mut self, t: u64, rows: &[SnapshotRow]) -> Result<(), SinkError> {
        self.steps.push((t, rows.to_vec()));
        Ok(())
    }
}
