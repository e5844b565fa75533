//! Main application entry point.
//!
//! Parses arguments, loads the configuration, then runs the pipeline once:
//! sun position, brightness and theme, applied through the external
//! commands. Any failure ends the process with `EXIT_FAILURE`.

use anyhow::{Context, Result};

use sunbright::args::{self, CliAction, ParsedArgs};
use sunbright::backend::{CommandSettings, create_sinks};
use sunbright::config::{self, Config};
use sunbright::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use sunbright::core::{DisplaySettings, Pipeline};
use sunbright::geo::Coordinates;
use sunbright::time_source::{FixedTimeSource, parse_local_time};
use sunbright::{log_debug, log_end, log_error_exit, log_version};

/// Options for a single run, straight from the command line.
struct RunOptions {
    debug_enabled: bool,
    dry_run: bool,
    config_dir: Option<String>,
    at: Option<String>,
    coordinates: Coordinates,
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let exit_code = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            args::display_help();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            EXIT_FAILURE
        }
        CliAction::Run {
            debug_enabled,
            dry_run,
            config_dir,
            at,
            latitude,
            longitude,
        } => {
            let options = RunOptions {
                debug_enabled,
                dry_run,
                config_dir,
                at,
                coordinates: Coordinates::new(latitude, longitude),
            };

            log_version!();

            match run(options) {
                Ok(()) => {
                    log_end!();
                    EXIT_SUCCESS
                }
                Err(e) => {
                    log_error_exit!("{:#}", e);
                    EXIT_FAILURE
                }
            }
        }
    };

    std::process::exit(exit_code);
}

fn run(options: RunOptions) -> Result<()> {
    options
        .coordinates
        .validate()
        .context("Invalid coordinates")?;

    // Resolve --at before touching the config so a bad time fails early
    let fixed_time = options
        .at
        .as_deref()
        .map(parse_local_time)
        .transpose()?;

    config::set_config_dir(options.config_dir)?;
    let config = Config::load()?;

    if options.debug_enabled {
        log_debug!(
            "Config file: {}",
            sunbright::utils::private_path(&Config::get_config_path()?)
        );
        config.log_config();
    }

    let (brightness_sink, theme_sink) = create_sinks(
        &CommandSettings::from_config(&config),
        options.dry_run,
        options.debug_enabled,
    );

    let mut pipeline = Pipeline::new(
        DisplaySettings::from_config(&config),
        brightness_sink,
        theme_sink,
    )
    .with_dry_run(options.dry_run)
    .with_debug(options.debug_enabled);

    if let Some(at) = fixed_time {
        pipeline = pipeline.with_time_source(Box::new(FixedTimeSource::new(at)));
    }

    pipeline.run(options.coordinates)?;

    Ok(())
}
