use anyhow::Result;
use std::path::Path;
use ytconvert_core::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    println!("ytconvert configuration\n");
    println!("{}", toml::to_string_pretty(&config)?);

    if config.paths.yt_dlp.is_none() {
        println!("# paths.yt_dlp unset: auto-detected from PATH");
    }
    if config.cors.allowed_origins.is_empty() {
        println!("# cors.allowed_origins empty: every origin is accepted");
    }

    // Show config file locations
    println!("\nConfig sources (in priority order):");
    println!("  1. serve --host / --port");
    println!("  2. Environment variables (YTCONVERT_*, nested keys joined by __)");
    if let Some(p) = config_path {
        println!("  3. {} (specified)", p.display());
    }
    if let Some(default_config) = Config::default_config_file() {
        println!("  4. {}", default_config.display());
    }

    Ok(())
}
