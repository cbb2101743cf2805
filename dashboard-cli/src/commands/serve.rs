//! HTTP server command for the dashboard API
//!
//! Connects to MongoDB (or an in-memory store), runs the server until
//! shutdown, then disconnects.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use dashboard_server::db::mongo::DEFAULT_DATABASE;
use dashboard_server::{run_server, MemoryStore, MongoConfig, MongoStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: Option<String>,

    /// Database holding the campaign, revenue, and overview collections
    #[arg(long, env = "MONGODB_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Deadline for each database operation, in seconds
    #[arg(long, default_value_t = 10)]
    pub op_timeout_secs: u64,

    /// Allowed CORS origin (repeatable; defaults to the dashboard dev servers)
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep data in memory instead of MongoDB (lost on shutdown)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_origins: if self.cors_origins.is_empty() {
                defaults.cors_origins
            } else {
                self.cors_origins.clone()
            },
            cors_permissive: self.cors_permissive,
            op_timeout: Duration::from_secs(self.op_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    tracing::info!("Starting dashboard server on {}", config.bind_addr);

    if args.in_memory {
        tracing::warn!("Using in-memory store - data is lost on shutdown");
        run_server(Arc::new(MemoryStore::new()), config)
            .await
            .context("Server error")?;
        return Ok(());
    }

    let uri = args
        .mongodb_uri
        .context("MONGODB_URI not set. Set via --mongodb-uri, MONGODB_URI env, or .env")?;
    let mongo_config = MongoConfig::new(uri).with_database(args.database);

    let store = MongoStore::connect(&mongo_config)
        .await
        .context("Failed to connect to MongoDB")?;

    // Run server (blocks until shutdown), then release the client either way
    let served = run_server(Arc::new(store.clone()), config).await;
    store.disconnect().await;

    served.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        let argv = std::iter::once("serve").chain(args.iter().copied());
        Harness::try_parse_from(argv).unwrap().serve
    }

    #[test]
    fn explicit_flags_build_server_config() {
        let args = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--op-timeout-secs",
            "3",
            "--cors-origin",
            "http://localhost:4000",
            "--cors-origin",
            "http://localhost:4001",
        ]);
        let config = args.server_config();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.op_timeout, Duration::from_secs(3));
        assert_eq!(
            config.cors_origins,
            ["http://localhost:4000", "http://localhost:4001"]
        );
    }

    #[test]
    fn rejects_non_numeric_port() {
        let argv = ["serve", "--port", "eighty"];
        assert!(Harness::try_parse_from(argv).is_err());
    }
}
