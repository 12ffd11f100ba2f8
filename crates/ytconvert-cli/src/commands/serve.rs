use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::args::ServeOptions;
use ytconvert_core::{config::Config, Converter, YtDlpResolver};
use ytconvert_server::AppState;

pub async fn run(options: &ServeOptions, config_path: Option<&Path>) -> Result<()> {
    let mut config = Config::load(config_path)?;

    if let Some(ref host) = options.host {
        config.server.host = host.clone();
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }

    let yt_dlp_path = config
        .yt_dlp_path()
        .context("yt-dlp is required; install it or set paths.yt_dlp")?;
    info!("Using yt-dlp at {}", yt_dlp_path.display());

    let converter = Converter::new(Arc::new(YtDlpResolver::new(yt_dlp_path)));
    let state = AppState::new(converter).with_allowed_origins(config.cors.allowed_origins.clone());

    let addr = config.bind_addr()?;
    info!("ytconvert {} starting on http://{}", env!("CARGO_PKG_VERSION"), addr);

    ytconvert_server::serve(addr, state, shutdown_signal()).await?;

    info!("ytconvert stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
