pub mod cli;
pub mod config;
pub mod models;
pub mod parser;
pub mod storage;

pub use config::Config;

use clap::Parser;
use cli::{Cli, Commands, ParseCommands};
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { command } => match command {
            ParseCommands::Xml { file } => cli::cmd_parse_xml(&file),
            ParseCommands::List { file, kind } => {
                cli::cmd_parse_list(&file, kind.map(Into::into))
            }
            ParseCommands::History { file } => cli::cmd_parse_history(&file),
        },

        Commands::Combine { username, only } => {
            cli::cmd_combine(&config, &username, only.map(Into::into))
        }

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("Config file already exists.");
            }
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    // Logs go to stderr so stdout stays parseable JSON.
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
