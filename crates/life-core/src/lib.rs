//! Core library for simulating Conway's Game of Life in a terminal.
//!
//! The simulation space is unbounded: the living-cell set may grow in any
//! direction. Only rendering is windowed to a fixed viewport.
//!
//! # Architecture Overview
//!
//! - **Engine**: the generation step over a sparse set of living cells
//! - **Renderer**: projection of the living set onto the viewport as text
//! - **Driver**: the clear, render, step, delay loop and its stop conditions
//! - **Terminal**: the screen capability injected into the driver
//! - **Pattern source**: fetching and parsing `.cells` patterns over HTTP
//! - **Configuration**: run parameters built once at startup

pub mod config;
pub mod driver;
pub mod engine;
pub mod errors;
pub mod pattern;
pub mod render;
pub mod terminal;

pub use config::{BoardSize, Glyphs, PatternOffset, PatternSourceConfig, RunConfig};
pub use driver::{shutdown_signal, RunSummary, Simulation, StopReason};
pub use engine::{neighbors, participants, step, Cell, LivingSet};
pub use errors::LifeError;
pub use pattern::{parse_cells, PatternSource};
pub use render::{render, Frame};
pub use terminal::{CrosstermTerminal, RecordingTerminal, TerminalController};
