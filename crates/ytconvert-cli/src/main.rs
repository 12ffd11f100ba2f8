mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose))))
        .init();

    match cli.command {
        Some(Commands::Serve(options)) => commands::serve::run(&options, cli.config.as_deref()).await,
        Some(Commands::Doctor) => commands::doctor::run(cli.config.as_deref()).await,
        Some(Commands::Config) => commands::config::run(cli.config.as_deref()).await,
        None => commands::serve::run(&args::ServeOptions::default(), cli.config.as_deref()).await,
    }
}

/// Default filter for a `-v` count. Target directives match by prefix, so
/// `ytconvert` also covers `ytconvert_core` and `ytconvert_server`.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "ytconvert=info",
        1 => "ytconvert=debug,tower_http=debug",
        2 => "ytconvert=trace,tower_http=trace",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(0), "ytconvert=info");
        assert_eq!(log_filter(1), "ytconvert=debug,tower_http=debug");
        assert_eq!(log_filter(5), "trace");
        for verbose in 0..4 {
            let filter = EnvFilter::try_new(log_filter(verbose)).unwrap();
            assert!(!filter.to_string().contains("ytconvert_core"));
        }
    }
}
