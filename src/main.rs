mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use ms_codec::{convert, decompose, format, parse};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, FormatArgs, ParseArgs};
use crate::config::AppConfig;

fn main() -> Result<()> {
    init_tracing();

    let Cli { config, command } = Cli::parse();

    match command {
        Command::Parse {
            text,
            breakdown,
            parse: cli_parse,
        } => {
            let cli_parse = cli_parse.with_breakdown(breakdown);
            let app_config = AppConfig::load(config.as_ref(), cli_parse, FormatArgs::default())?;
            log_config_source(&app_config);

            let ms = parse(&text, &app_config.options.parse)
                .with_context(|| format!("failed to parse duration {text:?}"))?;
            if breakdown {
                let parts = serde_json::to_string_pretty(&decompose(ms))
                    .context("failed to serialize duration breakdown")?;
                println!("{parts}");
            }
            println!("{ms}");
        }
        Command::Format {
            millis,
            format: cli_format,
        } => {
            let app_config = AppConfig::load(config.as_ref(), ParseArgs::default(), cli_format)?;
            log_config_source(&app_config);

            let text = format(millis, &app_config.options.format)
                .with_context(|| format!("failed to format {millis} milliseconds"))?;
            println!("{text}");
        }
        Command::Convert {
            value,
            parse: cli_parse,
            format: cli_format,
        } => {
            let app_config = AppConfig::load(config.as_ref(), cli_parse, cli_format)?;
            log_config_source(&app_config);

            let converted = convert(&cli::input_value(&value), &app_config.options)?;
            println!("{converted}");
        }
    }

    Ok(())
}

fn log_config_source(app_config: &AppConfig) {
    match &app_config.config_file {
        Some(path) => tracing::debug!(path = %path.display(), "loaded configuration file"),
        None => tracing::debug!("no configuration file; using flags and defaults"),
    }
    tracing::trace!(options = ?app_config.options, "resolved options");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
