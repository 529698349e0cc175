mod app;
mod cli;
mod commands;
mod config;
mod data;
mod input;
mod logging;
mod theme;
mod ui;

use clap::Parser;
use color_eyre::eyre::Result;

use cli::{Cli, Commands};
use config::{ensure_dirs, LogLevel, UserConfig};
use logging::LogMode;

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = ensure_dirs();

    let cli = Cli::parse();
    let config = UserConfig::load();
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => {
            let _guard = logging::init(config.log_level, LogMode::File, log_level_override);
            app::run_tui(config)
        }
        Commands::Onboard { name, age, gender } => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::onboard::run(&name, &age, gender)
        }
        Commands::Pipe {
            samples,
            interval,
            compact,
        } => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::pipe::run(samples, interval, compact)
        }
        Commands::Estimate(args) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::estimate::run(args)
        }
        Commands::Debug => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::debug::run()
        }
        Commands::Config { path, reset, edit } => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::config::run(path, reset, edit)
        }
    }
}
