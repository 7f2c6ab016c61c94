//! Command-line front end for the staff roster.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod views;
