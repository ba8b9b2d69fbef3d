use crate::config::toml_config::TomlConfig;
use crate::config::{ConfigOverrides, ServiceConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "starw")]
#[command(about = "Aggregates the paginated SWAPI people collection behind a small REST API")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve /StarW and /StarW/{id}
    Serve(ServeArgs),
    /// Print every person from a running server
    List(ClientArgs),
    /// Print one person from a running server
    Show {
        id: u32,
        #[command(flatten)]
        client: ClientArgs,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Address to listen on [default: 127.0.0.1:8080]")]
    pub bind: Option<String>,

    #[arg(long, help = "Upstream API root [default: https://swapi.dev/api]")]
    pub upstream: Option<String>,

    #[arg(long, help = "Upstream collection name [default: people]")]
    pub collection: Option<String>,

    #[arg(long, help = "Fail a listing that needs more pages than this")]
    pub max_pages: Option<u32>,

    #[arg(long, help = "Per-request upstream timeout")]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct ClientArgs {
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub api: String,
}

impl From<&ServeArgs> for ConfigOverrides {
    fn from(args: &ServeArgs) -> Self {
        Self {
            bind: args.bind.clone(),
            upstream_base_url: args.upstream.clone(),
            collection: args.collection.clone(),
            max_pages: args.max_pages,
            timeout_seconds: args.timeout_seconds,
        }
    }
}

impl Cli {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    pub fn service_config(&self, args: &ServeArgs) -> Result<ServiceConfig> {
        let file = self.load_file()?;
        let config = ServiceConfig::resolve(file.as_ref(), &ConfigOverrides::from(args));
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::parse_from([
            "starw",
            "--verbose",
            "serve",
            "--bind",
            "0.0.0.0:8081",
            "--max-pages",
            "12",
        ]);

        let Command::Serve(args) = &cli.command else {
            panic!("expected serve");
        };
        let config = cli.service_config(args).unwrap();

        assert!(cli.verbose);
        assert_eq!(config.bind, "0.0.0.0:8081");
        assert_eq!(config.max_pages, Some(12));
        assert_eq!(config.collection, "people");
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["starw", "show", "4", "--api", "http://localhost:5000"]);

        match cli.command {
            Command::Show { id, client } => {
                assert_eq!(id, 4);
                assert_eq!(client.api, "http://localhost:5000");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_bind_fails_validation() {
        let cli = Cli::parse_from(["starw", "serve", "--bind", "nowhere"]);
        let Command::Serve(args) = &cli.command else {
            panic!("expected serve");
        };
        assert!(cli.service_config(args).is_err());
    }
}
