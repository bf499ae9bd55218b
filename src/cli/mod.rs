//! Command-line interface
//!
//! `devscout` with no command opens the terminal form. `ask` runs a single
//! query, `repl` a prompt loop, and `serve` the web form.

pub mod ask;
pub mod repl;

use crate::config::Config;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "devscout", version, about = "Ask the developer-tools research agent")]
pub struct Cli {
    /// Agent base URL (overrides AGENT_BASE_URL)
    #[arg(long, global = true)]
    pub agent_url: Option<String>,

    /// Agent route (overrides AGENT_PATH)
    #[arg(long, global = true)]
    pub agent_path: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Trim surrounding whitespace from the query before sending it
    #[arg(long, global = true)]
    pub trim_query: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive terminal form (default)
    Tui,
    /// Ask a single question and print the result
    Ask(AskArgs),
    /// Prompt loop; type `quit` or `exit` to leave
    Repl,
    /// Serve the query form over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// The question; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind host (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.agent_url {
            config.agent.base_url = url.clone();
        }
        if let Some(path) = &self.agent_path {
            config.agent.path = path.clone();
        }
        if let Some(timeout) = self.timeout {
            config.agent.timeout_secs = Some(timeout);
        }
        if self.trim_query {
            config.agent.trim_query = true;
        }
        if let Some(Commands::Serve(args)) = &self.command {
            if let Some(host) = &args.host {
                config.server.host = host.clone();
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
        }
    }
}
