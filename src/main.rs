use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use folio::config::{Config, StartView};
use folio::logging::init_tracing;
use folio::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Terminal portfolio page")]
struct Cli {
    /// Path to config file (default: ~/.config/folio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the coding resources endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Override how many coding resources are kept
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// View shown at startup
    #[arg(long, value_enum)]
    view: Option<StartView>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(err) = runtime::run(config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Could not load config from '{}'", path.display()))?;

    if let Some(endpoint) = &cli.endpoint {
        config.resources.endpoint = endpoint.clone();
    }
    if let Some(limit) = cli.limit {
        config.resources.limit = limit;
    }
    if let Some(view) = cli.view {
        config.ui.start_view = view;
    }

    config.validate().context("Invalid command-line override")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_file() {
        let cli = Cli::parse_from([
            "folio",
            "--config",
            "/nonexistent/folio/config.toml",
            "--endpoint",
            "http://127.0.0.1:9/list",
            "--limit",
            "3",
            "--view",
            "resources",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.resources.endpoint, "http://127.0.0.1:9/list");
        assert_eq!(config.resources.limit, 3);
        assert_eq!(config.ui.start_view, StartView::Resources);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from([
            "folio",
            "--config",
            "/nonexistent/folio/config.toml",
            "--limit",
            "0",
        ]);
        assert!(load_config(&cli).is_err());
    }
}
