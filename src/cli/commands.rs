//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing::info;

use crate::catalog::YtMusicClient;
use crate::config::{self, Config};
use crate::error::Result;
use crate::search::{DEFAULT_FILTER_TYPE, DEFAULT_LIMIT, SearchQuery, SearchResult, SearchService};
use crate::server::{self, AppState};

/// YouTube Music search API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "YTMUSIC_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (the default when no command is given)
    Serve {
        /// Address to listen on
        #[arg(long, env = "YTMUSIC_SEARCH_HOST")]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long, env = "YTMUSIC_SEARCH_PORT")]
        port: Option<u16>,
    },
    /// Run a single search and print the results as JSON
    Search {
        /// Search text
        query: String,
        /// Result category: songs, videos, albums, artists, playlists, ...
        #[arg(short, long, default_value = DEFAULT_FILTER_TYPE)]
        filter_type: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
        limit: i64,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

/// Run the specified CLI command, serving the API when none is given.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    let rt = Runtime::new()?;

    match &cli.command {
        None => cmd_serve(&rt, config, None, None),
        Some(Commands::Serve { host, port }) => cmd_serve(&rt, config, host.clone(), *port),
        Some(Commands::Search {
            query,
            filter_type,
            limit,
            compact,
        }) => {
            let query = SearchQuery {
                query: query.clone(),
                filter_type: filter_type.clone(),
                limit: *limit,
            };
            cmd_search(&rt, &config, &query, *compact)
        }
    }
}

/// Build the search service over a live YouTube Music client.
fn build_service(config: &Config) -> Result<SearchService> {
    let client = YtMusicClient::new(config.provider.client_config())?;
    Ok(SearchService::new(Arc::new(client)))
}

/// Run one search to completion on the CLI runtime.
fn search_once(
    rt: &Runtime,
    service: &SearchService,
    query: &SearchQuery,
) -> Result<Vec<SearchResult>> {
    Ok(rt.block_on(service.search_songs(query))?)
}

/// Command-line host/port win over the config file.
fn apply_server_overrides(mut config: Config, host: Option<String>, port: Option<u16>) -> Config {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config
}

// ============================================================================
// Individual command implementations
// ============================================================================

fn cmd_serve(
    rt: &Runtime,
    config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let config = apply_server_overrides(config, host, port);
    let addr = config.server.socket_addr()?;
    let state = AppState::new(
        build_service(&config).context("Failed to create YouTube Music client")?,
    );

    info!("Starting YouTube Music search API on {}", addr);
    rt.block_on(server::serve(addr, state))?;
    Ok(())
}

fn cmd_search(
    rt: &Runtime,
    config: &Config,
    query: &SearchQuery,
    compact: bool,
) -> anyhow::Result<()> {
    let service = build_service(config).context("Failed to create YouTube Music client")?;
    let results = search_once(rt, &service, query)
        .with_context(|| format!("Search for {:?} failed", query.query))?;

    let json = if compact {
        serde_json::to_string(&results)?
    } else {
        serde_json::to_string_pretty(&results)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::catalog::provider::mocks::{StubCatalog, song};
    use crate::error::Error;
    use crate::search::SearchError;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["ytmusic-search"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["ytmusic-search", "search", "example song"]).unwrap();
        match cli.command {
            Some(Commands::Search {
                query,
                filter_type,
                limit,
                compact,
            }) => {
                assert_eq!(query, "example song");
                assert_eq!(filter_type, "songs");
                assert_eq!(limit, 5);
                assert!(!compact);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_search_accepts_negative_limit() {
        let cli =
            Cli::try_parse_from(["ytmusic-search", "search", "q", "--limit", "-2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Search { limit: -2, .. })));
    }

    #[test]
    fn test_serve_flags_and_global_config() {
        let cli = Cli::try_parse_from([
            "ytmusic-search",
            "serve",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--config",
            "/tmp/yt.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/yt.toml")));
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_build_service_from_default_config() {
        assert!(build_service(&Config::default()).is_ok());
    }

    #[test]
    fn test_search_once() {
        let rt = Runtime::new().unwrap();
        let service = SearchService::new(Arc::new(StubCatalog::with_results(vec![song(
            "vid1", "First", "MPREb_1",
        )])));

        let results = search_once(&rt, &service, &SearchQuery::new("first")).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].video_id, "vid1");
    }

    #[test]
    fn test_search_once_errors() {
        let rt = Runtime::new().unwrap();

        let empty = SearchService::new(Arc::new(StubCatalog::empty()));
        let err = search_once(&rt, &empty, &SearchQuery::new("zzz")).unwrap_err();
        assert!(matches!(err, Error::Search(SearchError::NotFound)));

        let failing = SearchService::new(Arc::new(StubCatalog::failing(CatalogError::RateLimited)));
        let err = search_once(&rt, &failing, &SearchQuery::new("q")).unwrap_err();
        assert_eq!(err.to_string(), "Rate limited - try again later");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = apply_server_overrides(Config::default(), Some("::1".to_string()), Some(1234));
        assert_eq!(config.server.host, "::1");
        assert_eq!(config.server.port, 1234);

        let untouched = apply_server_overrides(Config::default(), None, None);
        assert_eq!(untouched, Config::default());
    }
}
