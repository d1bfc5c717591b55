use clap::Parser;
use std::path::PathBuf;

use offers::db::DEFAULT_DB_FILE;
use offers::reports::chart::DEFAULT_CHART_FILE;

#[derive(Parser, Debug)]
#[command(name = "offers")]
#[command(
    version,
    about = "Record bank investment offers and compare their compound-interest profit"
)]
#[command(
    long_about = "Prompts for bank offers (name, yearly interest rate, term in years, amount) until 'done' is entered, stores them, then prints the compounded total and profit of every stored offer, names the most profitable one and writes a profit chart."
)]
pub struct Cli {
    /// SQLite file holding the offers
    #[arg(long = "db", value_name = "PATH", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Where to write the profit chart (SVG)
    #[arg(long = "chart", value_name = "PATH", default_value = DEFAULT_CHART_FILE)]
    pub chart: PathBuf,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
