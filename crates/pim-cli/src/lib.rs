//! Command line validation and filtering of product import files.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
