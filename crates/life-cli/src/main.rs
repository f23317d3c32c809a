use anyhow::Result;
use life_cli::args::Cli;
use life_cli::logging;
use life_core::{shutdown_signal, CrosstermTerminal, PatternSource, Simulation};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args());
    logging::init(&cli.log_level, cli.log_file.as_deref())?;

    let run_config = cli.run_config()?;
    let source = PatternSource::new(cli.source_config()?)?;

    // An interrupt at any point, including during the download, ends the
    // process quietly.
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let fetched = tokio::select! {
        biased;
        _ = &mut shutdown => return Ok(()),
        fetched = source.fetch(&cli.pattern) => fetched,
    };

    let Some(pattern) = fetched else {
        println!("Could not find {}", cli.pattern);
        return Ok(());
    };

    if pattern.is_empty() {
        println!("Pattern {} has no living cells", cli.pattern);
        return Ok(());
    }

    let cells = cli.offset().apply(pattern)?;
    log::info!(
        "Starting '{}' on a {}x{} board",
        cli.pattern,
        run_config.size.height,
        run_config.size.width
    );

    let mut terminal = CrosstermTerminal::stdout()?;
    let summary = Simulation::new(run_config, cells)
        .run(&mut terminal, &mut shutdown)
        .await?;

    log::info!(
        "Finished '{}': {:?} after {} generations",
        cli.pattern,
        summary.reason,
        summary.frames
    );
    Ok(())
}
