use clap::Parser;
use devscout::cli::{self, Cli, Commands};
use devscout::{client, config::Config, create_router, tui, utils, AppState};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config);

    // The terminal form owns the screen, so it logs to a file
    let _guard = match cli.command {
        None | Some(Commands::Tui) => Some(utils::init_file_logger(&config.logging.log_dir)?),
        _ => {
            utils::init_stderr_logger();
            None
        }
    };

    // The endpoint is checked here, once flags have been applied
    let agent = client::from_config(&config.agent)?;
    let trim_query = config.agent.trim_query;

    match cli.command {
        None | Some(Commands::Tui) => {
            tui::run(agent, trim_query).await?;
        }
        Some(Commands::Ask(args)) => {
            let query = args.query.join(" ");
            let mut stdout = std::io::stdout();
            let ok = cli::ask::run(agent.as_ref(), &query, trim_query, args.format, &mut stdout).await?;
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Repl) => {
            let mut stdout = std::io::stdout();
            cli::repl::run(agent.as_ref(), trim_query, tokio::io::stdin(), &mut stdout).await?;
        }
        Some(Commands::Serve(_)) => {
            let addr = format!("{}:{}", config.server.host, config.server.port);
            info!(endpoint = %agent.endpoint(), "Agent endpoint");

            let state = AppState { config, client: agent };
            let app = create_router(state);

            let listener = TcpListener::bind(&addr).await?;
            info!("Server listening on {}", addr);
            axum::serve(listener, app)
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
