use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid burst window: {0} seconds (must be finite and non-negative)")]
    InvalidWindow(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
