//! Season standings CLI.

use clap::{ColorChoice, Parser};
use season_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use season_cli::commands::{run_inspect, run_standings};
use season_cli::logging::{LogConfig, LogFormat, init_logging};
use season_cli::summary::{print_race, print_standings};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Standings(args) => match run_standings(&args) {
            Ok(run) => match args.format {
                OutputFormatArg::Table => {
                    print_standings(&run);
                    0
                }
                OutputFormatArg::Json => match run.report.to_json(true) {
                    Ok(json) => {
                        println!("{json}");
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error}");
                        1
                    }
                },
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inspect(args) => match run_inspect(&args) {
            Ok(run) => {
                print_race(&run);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
