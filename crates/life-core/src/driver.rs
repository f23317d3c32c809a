//! The generation loop: clear, render, stop on an empty viewport, step, delay.
//!
//! The loop is strictly sequential. Its only suspension point is the delay
//! between generations, which races against a caller-supplied shutdown future
//! so that an interrupt ends the run cleanly instead of killing the process.

use std::future::Future;

use crate::config::RunConfig;
use crate::engine::{step, LivingSet};
use crate::errors::LifeError;
use crate::render::render;
use crate::terminal::TerminalController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No living cell fell inside the viewport. Cells may still be alive off-screen.
    EmptyViewport,
    GenerationLimitReached,
    Interrupted,
}

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub reason: StopReason,
    /// Frames drawn, including the final empty one for `EmptyViewport`.
    pub frames: u64,
    /// Generation steps computed.
    pub steps: u64,
    /// The living set at the moment the loop stopped.
    pub living: LivingSet,
}

pub struct Simulation {
    config: RunConfig,
    cells: LivingSet,
}

impl Simulation {
    pub fn new(config: RunConfig, cells: LivingSet) -> Self {
        Self { config, cells }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn cells(&self) -> &LivingSet {
        &self.cells
    }

    /// Runs until the viewport empties, the generation limit is hit, or
    /// `shutdown` resolves during a delay.
    pub async fn run<T, F>(mut self, terminal: &mut T, shutdown: F) -> Result<RunSummary, LifeError>
    where
        T: TerminalController + ?Sized,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut generation: u64 = 1;
        let mut frames: u64 = 0;
        let mut steps: u64 = 0;

        let reason = loop {
            terminal.clear()?;
            let (frame, visible) = render(self.config.size, &self.cells, self.config.glyphs);
            terminal.draw(&frame)?;
            frames += 1;

            if visible == 0 {
                break StopReason::EmptyViewport;
            }

            self.cells = step(&self.cells);
            steps += 1;
            log::debug!(
                "Generation {}: {} visible, {} living after step",
                generation,
                visible,
                self.cells.len()
            );

            tokio::select! {
                biased;
                _ = &mut shutdown => break StopReason::Interrupted,
                _ = tokio::time::sleep(self.config.period) => {}
            }

            if self.config.generations == Some(generation) {
                break StopReason::GenerationLimitReached;
            }
            generation += 1;
        };

        log::info!(
            "Simulation stopped after {} frames: {:?}",
            frames,
            reason
        );

        Ok(RunSummary {
            reason,
            frames,
            steps,
            living: self.cells,
        })
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
///
/// If a handler cannot be installed the corresponding branch never resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, stopping simulation");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, stopping simulation");
        },
    }
}
