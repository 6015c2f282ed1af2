//! Command-line front end for the growth-standards engine.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
