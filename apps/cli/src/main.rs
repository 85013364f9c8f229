#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{architectures, features, validate};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use capgate::domain::config::{Config, LoggerConfig};
use capgate::kernel::config::load_config;
use capgate::logger::{Logger, parse_level};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: Config = load_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.logger, cli.log_level.as_deref())?;
    let engine = capgate::init(&config);

    match cli.command {
        AppCommands::Features { openshift_version, arch, platform, external_name, json } => {
            features::list_features(
                &engine,
                &openshift_version,
                arch.as_deref(),
                platform.as_deref(),
                external_name.as_deref(),
                json,
            )?;
        },
        AppCommands::Architectures { openshift_version, json } => {
            architectures::list_architectures(&engine, &openshift_version, json)?;
        },
        AppCommands::Validate { snapshot, arch } => {
            validate::validate_snapshot(&engine, &snapshot, arch.as_deref())?;
        },
    }

    Ok(())
}

fn init_logger(config: &LoggerConfig, level: Option<&str>) -> Result<Logger> {
    let level = parse_level(level.unwrap_or(&config.level))?;
    let builder = Logger::builder().name("capgate").level(level).console(config.console);

    let logger = match &config.path {
        Some(path) if config.json => builder.path(path).json().init()?,
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
