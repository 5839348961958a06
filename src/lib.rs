//! Resume checker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod store;

pub use config::Config;
pub use error::{ResumeCheckerError, Result};
