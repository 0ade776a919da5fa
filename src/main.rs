use std::process::ExitCode;

use clap::Parser;
use postdeck::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    postdeck::logging::init_tracing();
    let cli = Cli::parse();
    cli::run(cli).await
}
