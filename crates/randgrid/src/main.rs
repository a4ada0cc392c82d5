use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{App, Commands};

mod cli;
mod grid;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    init_tracing(app.global.verbose);

    match &app.cmd {
        Commands::Image(arg) => arg.run(&app.global).await,
        Commands::Ints(arg) => arg.run(&app.global).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
