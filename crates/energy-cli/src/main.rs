//! Energy dimensions CLI.

use clap::{ColorChoice, Parser};
use energy_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_kinds, run_list, run_parse};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let color = cli.color.color;
    let result = match &cli.command {
        Command::Parse(args) => run_parse(args, color).map(|outcome| {
            let code = outcome.exit_code(args.fail_on_unrecognized);
            if code != 0 {
                eprintln!("error: {}", outcome.failure_message());
            }
            code
        }),
        Command::List(args) => run_list(args, color).map(|()| 0),
        Command::Kinds(args) => run_kinds(args, color).map(|()| 0),
    };
    let exit_code = result.unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        1
    });
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        ..LogConfig::default()
    };
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_spans = format == LogFormat::Json;
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_level(level_filter)
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        log_config_from_cli(&cli)
    }

    #[test]
    fn timestamps_and_targets_follow_flags() {
        let config = config_for(&[
            "energy-dimensions",
            "--log-timestamps",
            "--log-target",
            "kinds",
        ]);
        assert!(config.with_timestamps);
        assert!(config.with_target);

        let config = config_for(&["energy-dimensions", "kinds"]);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn explicit_level_overrides_verbosity() {
        let config = config_for(&[
            "energy-dimensions",
            "-vv",
            "--log-level",
            "error",
            "kinds",
        ]);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }
}
