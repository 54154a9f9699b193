mod error;
mod fetch;
mod parser;
mod types;

pub use error::OemError;
pub use fetch::OemClient;
pub use parser::parse_oem;
pub use types::{OemDataset, OemHeader, OemMetadata, StateVector};
