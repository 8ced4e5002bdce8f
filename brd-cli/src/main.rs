//! brd-cli - Command line tool for bike rental demand forecasts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "brd-cli",
    version,
    about = "Bike rental demand toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: brd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    brd_cmd::run(cli.command)
}
