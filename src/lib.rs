pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Particle, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::geometry::{wrap_position, wrap_angle, minimum_image};
pub use simulation::neighbors::{NeighborFinder, BruteForceFinder};
pub use simulation::cell_index::{CellIndexFinder, CellNeighborTable, CellGrid};
pub use simulation::update::{register_self_neighbors, apply_update, StepError};
pub use simulation::scenario::Scenario;
pub use simulation::runner::{Runner, RunError};

pub use configuration::config::{FinderConfig, EngineConfig, ParametersConfig, ScenarioConfig, ConfigError};

pub use output::sink::{SnapshotSink, SnapshotRow, MemorySink, SinkError};
pub use output::csv_writer::CsvStepWriter;
pub use output::metadata::write_params_csv;

pub use benchmark::benchmark::{bench_finders, bench_step_curve};
