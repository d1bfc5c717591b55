mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use offers::collector::{collect_offers, BufReadSource};
use offers::db;
use offers::error::Result;
use offers::reports::{run_report, ReportOutcome, SvgChart};
use offers::ui::Readline;

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries prompts and the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut store = db::open_store(&cli.db)?;

    let committed = if io::stdin().is_terminal() {
        let known: Vec<String> = store.list_all()?.into_iter().map(|o| o.name).collect();
        let mut readline = Readline::new(known.as_slice())?;
        collect_offers(&mut readline, &mut store)?
    } else {
        let mut source = BufReadSource::new(io::stdin().lock(), io::stdout());
        collect_offers(&mut source, &mut store)?
    };
    info!(committed, "Collection finished");

    let offers = store.list_all()?;
    let chart = SvgChart::new(&cli.chart);
    let mut stdout = io::stdout().lock();

    if let ReportOutcome::Reported { chart_path, .. } = run_report(&offers, &mut stdout, &chart)? {
        writeln!(
            stdout,
            "\n{} Chart saved to {}",
            "✓".green().bold(),
            chart_path.display()
        )?;
    }

    Ok(())
}
