pub mod analysis;
pub mod error;
pub mod log;

pub use error::{Error, Result};
