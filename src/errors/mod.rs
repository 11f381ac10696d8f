//! Error types for the texture admin service

mod types;

pub use types::{AppError, FetchError};
