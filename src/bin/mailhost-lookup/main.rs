mod args;
mod output;
#[cfg(feature = "with-tui")]
mod tui;

use anyhow::Result;
use clap::Parser;
use mailhost_lookup::{ValidationError, lookup_with_options, validate_with_mode};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::output::Format;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "with-tui")]
    if cli.tui {
        // pas de subscriber : il écrirait par-dessus l'écran alterné
        if let Err(err) = tui::run(cli.input_mode(), cli.lookup_options()).await {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(cli).await {
        println!("{}", failure_line(&err));
        std::process::exit(1);
    }
}

/// Line printed on stdout before exiting with status 1.
fn failure_line(err: &anyhow::Error) -> String {
    // message de validation affiché tel quel
    match err.downcast_ref::<ValidationError>() {
        Some(invalid) => invalid.to_string(),
        // la cause est déjà dans le message MX
        None => format!("Error: {err}"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Some(input) = cli.target.as_deref() else {
        println!("Usage: mailhost-lookup <email-or-domain>");
        std::process::exit(1);
    };
    let format = Format::parse(&cli.format)?;

    let domain = validate_with_mode(input, cli.input_mode())?;
    if format == Format::Human {
        println!("Looking up email hosting information for: {input} (domain: {domain})...");
    }

    let report =
        lookup_with_options(&domain, &cli.lookup_options(), &CancellationToken::new()).await?;

    output::write_report(&report, format)
}
