mod commands;
mod config;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;

/// Diagnostic logs go to stderr; stdout is reserved for progress output.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,kontent_gen=info,kontent_codegen=info,kontent_delivery=info".to_string(),
            2 => "info,kontent_gen=debug,kontent_codegen=debug,kontent_delivery=debug,kontent_core=debug"
                .to_string(),
            _ => "debug,kontent_gen=trace,kontent_codegen=trace,kontent_delivery=trace,kontent_core=trace"
                .to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.run().await
}
