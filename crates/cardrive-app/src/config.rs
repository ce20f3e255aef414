use anyhow::{bail, Context, Result};
use cardrive_api::normalize_base_url;
use cardrive_types::FuelFilter;
use std::path::PathBuf;

use crate::cli::Cli;

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub initial_filter: Option<FuelFilter>,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let api_url = normalize_base_url(&cli.api_url);
    let parsed = reqwest::Url::parse(&api_url)
        .with_context(|| format!("Invalid search service URL: {}", cli.api_url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Search service URL must use http or https: {}", cli.api_url);
    }

    let log_dir = match (&cli.log_dir, cli.log) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(cardrive_logging::default_logs_dir()?),
        (None, false) => None,
    };

    Ok(AppConfig {
        api_url,
        initial_filter: cli.filter,
        log_dir,
        verbose: cli.verbose,
    })
}

/// Log filter handed to env_logger unless RUST_LOG overrides it
pub fn default_log_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!(
        "warn,cardrive={0},cardrive_chat={0},cardrive_api={0},cardrive_logging={0}",
        level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["cardrive"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_trailing_slash_is_removed() {
        let config = setup_from_cli(&parse(&["--api-url", "http://localhost:8000/"])).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(setup_from_cli(&parse(&["--api-url", "not a url"])).is_err());
        assert!(setup_from_cli(&parse(&["--api-url", "ftp://cars.example.com"])).is_err());
    }

    #[test]
    fn test_explicit_log_dir_wins() {
        let config = setup_from_cli(&parse(&[
            "--api-url",
            "https://cars.example.com",
            "--log-dir",
            "/tmp/cardrive-logs",
        ]))
        .unwrap();
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/cardrive-logs")));
    }

    #[test]
    fn test_verbose_log_filter() {
        assert!(default_log_filter(true).contains("cardrive_chat=debug"));
        assert!(default_log_filter(false).contains("cardrive_chat=warn"));
    }
}
