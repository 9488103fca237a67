pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod service;

pub use error::TrackerError;
