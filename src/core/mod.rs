pub mod errors;
pub mod repository;
pub mod services;
pub mod utils;

pub use errors::{CliError, DashboardError};
pub use repository::Repository;
