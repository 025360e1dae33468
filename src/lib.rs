//! Job compass library

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod store;

pub use board::JobBoard;
pub use config::Config;
pub use error::{CompassError, Result};
pub use processing::job::Job;
