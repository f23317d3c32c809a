//! Command-line front-end for the terminal Game of Life
//!
//! Parses options into an explicit configuration, sets up logging, fetches
//! the starting pattern and hands it to the simulation loop.

pub mod args;
pub mod logging;
