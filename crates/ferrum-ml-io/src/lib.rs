pub mod csv_io;

pub use csv_io::{load_dataset, read_csv, read_csv_path, IngestError};
