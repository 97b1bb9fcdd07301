pub mod config;
pub mod errors;
pub mod prepare;

pub use config::Config;
pub use errors::{PrepareError, Result};
pub use prepare::{DistanceMatrixPreparer, Prepared};
