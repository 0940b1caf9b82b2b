pub mod sink;
pub mod csv_writer;
pub mod metadata;
