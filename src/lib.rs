//! Plan listings for the command line.
//!
//! Fetches compute and bare-metal plan pages from the API and renders them
//! as a table, JSON or YAML.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod plans;
pub mod printer;
pub mod utils;

pub use error::{Error, Result};
