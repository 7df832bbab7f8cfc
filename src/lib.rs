pub mod cli;
pub mod console;
pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, TaskError};
pub use models::*;
