pub mod config_io;
pub mod data_io;

pub use data_io::DataError;
