pub mod error;
pub mod source;

pub use error::DataError;
pub use source::{get_data_source, initialize_data_source, DataSource};
