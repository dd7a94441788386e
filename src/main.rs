use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trajeto::cli::{Cli, Commands};
use trajeto::types::config::Config;
use trajeto::TrajetoResult;

fn main() -> TrajetoResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    // Initialize logging with appropriate level
    let filter = EnvFilter::from_default_env().add_directive(
        format!("trajeto={}", log_level)
            .parse()
            .unwrap_or_else(|_| "trajeto=info".parse().expect("fallback directive is valid")),
    );

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            trajeto::cli::commands::init(path)?;
        }
        Commands::Record {
            user,
            start,
            end,
            metro,
            time,
            fare,
        } => {
            trajeto::cli::commands::record(
                &user,
                &start,
                &end,
                metro.as_deref(),
                time,
                fare,
                &config,
            )?;
        }
        Commands::History { user } => {
            trajeto::cli::commands::history(&user, &config)?;
        }
        Commands::Reset { user } => {
            trajeto::cli::commands::reset(&user, &config)?;
        }
        Commands::Config => {
            trajeto::cli::commands::config_cmd(&cli.config, &config)?;
        }
        Commands::Version => {
            trajeto::cli::commands::version();
        }
    }

    Ok(())
}
