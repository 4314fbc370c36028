//! `mcp-registry` - query an MCP registry service from the command line.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use mcp_registry_client::{
    print_server_cards, print_server_details, server_items, ClientConfig, RegistryClient,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "mcp-registry", version, about = "Query an MCP registry service")]
struct Cli {
    /// Registry service host [env: MCP_REGISTRY_HOST, default: localhost]
    #[arg(long, global = true)]
    host: Option<String>,

    /// Registry service port [env: MCP_REGISTRY_PORT, default: 8888]
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Path prefix of the registry API [env: MCP_REGISTRY_PATH, default: registry]
    #[arg(long, global = true)]
    registry_path: Option<String>,

    /// Path prefix of the extension API [env: MCP_EXTENSIONS_PATH, default: extension]
    #[arg(long, global = true)]
    extensions_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// List MCP servers
    Servers {
        /// Registry to query (aggregated view when omitted)
        #[arg(short, long)]
        registry: Option<String>,

        /// Show detailed information instead of cards
        #[arg(short, long)]
        details: bool,
    },

    /// List registries known to the service
    Registries,
}

impl Cli {
    /// Apply command-line overrides on top of an environment-derived config
    fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(path) = &self.registry_path {
            config.registry_path = path.clone();
        }
        if let Some(path) = &self.extensions_path {
            config.extensions_path = path.clone();
        }
        config
    }
}

/// Console-only tracing on stderr; stdout is reserved for command output.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // RUST_LOG takes precedence
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mcp_registry_client=info,mcp_registry=info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .compact()
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.apply(ClientConfig::from_env()?);
    debug!(?config, "Resolved registry configuration");

    let client = RegistryClient::new(config)?;

    match cli.command {
        Command::Servers { registry, details } => {
            let response = client
                .list_servers(registry.as_deref())
                .await
                .context("Failed to list servers")?;
            let items = server_items(&response);

            if items.is_empty() {
                println!("No servers found.");
                return Ok(());
            }

            if details {
                for item in items {
                    print_server_details(item)?;
                }
            } else {
                print_server_cards(items)?;
            }
        }
        Command::Registries => {
            let response = client
                .list_registries()
                .await
                .context("Failed to list registries")?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    init_tracing();

    run(Cli::parse()).await
}
