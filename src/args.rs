//! Command-line argument parsing and processing.
//!
//! `sunbright [OPTIONS] <latitude> <longitude>`
//!
//! Coordinates are positional decimal degrees. Anything that parses as a
//! number is treated as a coordinate, so `-33.87 151.21` works without a
//! `--` separator.

use crate::time_source::looks_like_datetime;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Calculate and apply brightness and theme for a location
    Run {
        debug_enabled: bool,
        dry_run: bool,
        config_dir: Option<String>,
        /// Fixed local time to evaluate at ("YYYY-MM-DD HH:MM:SS")
        at: Option<String>,
        latitude: f64,
        longitude: f64,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit with an error
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Problems are
    /// reported with `log_warning!` and turned into
    /// [`CliAction::ShowHelpDueToError`].
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut dry_run = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut at: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--dry-run" | "-n" => dry_run = true,
                "--config" | "-c" => {
                    // Parse: --config <directory>
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        config_dir = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                }
                "--at" | "-a" => {
                    // Parse: --at "YYYY-MM-DD HH:MM:SS"
                    if i + 1 < args_vec.len() {
                        let value = &args_vec[i + 1];
                        if looks_like_datetime(value) {
                            at = Some(value.clone());
                        } else {
                            log_warning!(
                                "Invalid time format: '{}'. Use \"YYYY-MM-DD HH:MM:SS\"",
                                value
                            );
                            unknown_arg_found = true;
                        }
                        i += 1;
                    } else {
                        log_warning!("Missing time for --at. Usage: --at \"YYYY-MM-DD HH:MM:SS\"");
                        unknown_arg_found = true;
                    }
                }
                _ => {
                    // Negative coordinates look like options, so numbers win
                    if arg_str.parse::<f64>().is_ok() || !arg_str.starts_with('-') {
                        positionals.push(arg_str.clone());
                    } else {
                        log_warning!("Unknown option: {arg_str}");
                        unknown_arg_found = true;
                    }
                }
            }
            i += 1;
        }

        // Determine the action based on parsed flags
        let action = if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else {
            match parse_coordinates(&positionals) {
                Some((latitude, longitude)) => CliAction::Run {
                    debug_enabled,
                    dry_run,
                    config_dir,
                    at,
                    latitude,
                    longitude,
                },
                None => CliAction::ShowHelpDueToError,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Turn the positional arguments into (latitude, longitude).
///
/// Range checks happen later when the coordinates are validated; this only
/// makes sure there are exactly two finite numbers.
fn parse_coordinates(positionals: &[String]) -> Option<(f64, f64)> {
    match positionals {
        [] => {
            log_warning!("Missing coordinates. Usage: sunbright <latitude> <longitude>");
            None
        }
        [_] => {
            log_warning!("Missing longitude. Usage: sunbright <latitude> <longitude>");
            None
        }
        [latitude, longitude] => {
            let latitude = parse_degrees("latitude", latitude)?;
            let longitude = parse_degrees("longitude", longitude)?;
            Some((latitude, longitude))
        }
        [_, _, extra @ ..] => {
            log_warning!("Unexpected argument: {}", extra.join(" "));
            None
        }
    }
}

fn parse_degrees(name: &str, value: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(degrees) if degrees.is_finite() => Some(degrees),
        _ => {
            log_warning!("Invalid {} value: {}", name, value);
            None
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("sunbright [OPTIONS] <latitude> <longitude>");
    log_block_start!("Arguments:");
    log_indented!("<latitude>             Decimal degrees, north positive (-90 to 90)");
    log_indented!("<longitude>            Decimal degrees, east positive (-180 to 180)");
    log_block_start!("Options:");
    log_indented!("-a, --at <time>        Evaluate at a local time instead of now");
    log_indented!("                       Format: \"YYYY-MM-DD HH:MM:SS\"");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-n, --dry-run          Show what would be set without running commands");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_end!();
}
