//! Backends that apply brightness and theme settings.
//!
//! The pipeline talks to two small capability traits instead of spawning
//! processes itself:
//!
//! - [`BrightnessSink`]: sets the monitor backlight percentage
//! - [`ThemeSink`]: switches the desktop color scheme
//!
//! ## Implementations
//!
//! - **ddcutil** ([`ddcutil::DdcutilBrightness`]): `ddcutil setvcp <code> <value>`
//! - **Plasma** ([`plasma::PlasmaColorScheme`]): `plasma-apply-colorscheme <name>`
//! - **Dry run** ([`dry_run::DryRun`]): logs the commands without running them
//!
//! Every command runs once. Failures are reported as [`ApplyError`] so the
//! caller can tell a missing utility from one that ran and failed.

use std::io;
use std::process::Command;

use crate::config::Config;

pub mod ddcutil;
pub mod dry_run;
pub mod plasma;

/// Failure of an external command.
#[derive(Debug)]
pub enum ApplyError {
    /// The executable could not be found
    NotFound { program: String },
    /// The executable exists but could not be started
    Spawn { program: String, source: io::Error },
    /// The command ran and exited unsuccessfully
    Failed {
        program: String,
        /// Exit code, `None` when terminated by a signal
        status: Option<i32>,
        stderr: String,
    },
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyError::NotFound { program } => {
                write!(f, "'{program}' is not installed or not in PATH")
            }
            ApplyError::Spawn { program, source } => {
                write!(f, "failed to start '{program}': {source}")
            }
            ApplyError::Failed {
                program,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "'{program}' exited with status {code}")?,
                    None => write!(f, "'{program}' was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApplyError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Capability to set the monitor brightness.
#[cfg_attr(test, mockall::automock)]
pub trait BrightnessSink {
    /// Apply a brightness percentage (0-100).
    fn apply_brightness(&mut self, value: u8) -> Result<(), ApplyError>;

    /// Get a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;
}

/// Capability to switch the desktop theme.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeSink {
    /// Apply a color scheme by its platform-specific name.
    fn apply_theme(&mut self, theme_name: &str) -> Result<(), ApplyError>;

    /// Get a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;
}

/// External command settings resolved from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSettings {
    pub brightness_command: String,
    pub brightness_feature_code: String,
    pub theme_command: String,
}

impl CommandSettings {
    pub fn from_config(config: &Config) -> Self {
        use crate::constants::{
            DEFAULT_BRIGHTNESS_COMMAND, DEFAULT_BRIGHTNESS_FEATURE_CODE, DEFAULT_THEME_COMMAND,
        };

        Self {
            brightness_command: config
                .brightness_command
                .clone()
                .unwrap_or_else(|| DEFAULT_BRIGHTNESS_COMMAND.to_string()),
            brightness_feature_code: config
                .brightness_feature_code
                .clone()
                .unwrap_or_else(|| DEFAULT_BRIGHTNESS_FEATURE_CODE.to_string()),
            theme_command: config
                .theme_command
                .clone()
                .unwrap_or_else(|| DEFAULT_THEME_COMMAND.to_string()),
        }
    }
}

/// Create the brightness and theme backends for a run.
pub fn create_sinks(
    commands: &CommandSettings,
    dry_run: bool,
    debug_enabled: bool,
) -> (Box<dyn BrightnessSink>, Box<dyn ThemeSink>) {
    if dry_run {
        (
            Box::new(dry_run::DryRun::new(commands.clone())),
            Box::new(dry_run::DryRun::new(commands.clone())),
        )
    } else {
        (
            Box::new(ddcutil::DdcutilBrightness::new(
                &commands.brightness_command,
                &commands.brightness_feature_code,
                debug_enabled,
            )),
            Box::new(plasma::PlasmaColorScheme::new(
                &commands.theme_command,
                debug_enabled,
            )),
        )
    }
}

/// Format a command line for display.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run an external command to completion and check its exit status.
///
/// Standard output is discarded; standard error is captured so it can be
/// included in the error.
pub fn run_command(program: &str, args: &[String], debug_enabled: bool) -> Result<(), ApplyError> {
    if debug_enabled {
        log_debug!("Running: {}", display_command(program, args));
    }

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ApplyError::NotFound {
                program: program.to_string(),
            },
            _ => ApplyError::Spawn {
                program: program.to_string(),
                source,
            },
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ApplyError::Failed {
            program: program.to_string(),
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_command() {
        assert_eq!(
            display_command("ddcutil", &args(&["setvcp", "10", "43"])),
            "ddcutil setvcp 10 43"
        );
        assert_eq!(display_command("true", &[]), "true");
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let result = run_command("sunbright-definitely-not-a-real-program", &[], false);
        assert!(matches!(result, Err(ApplyError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        assert!(run_command("sh", &args(&["-c", "exit 0"]), false).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_command_reports_status_and_stderr() {
        let result = run_command("sh", &args(&["-c", "echo 'no monitor' >&2; exit 3"]), false);
        match result {
            Err(ApplyError::Failed {
                program,
                status,
                stderr,
            }) => {
                assert_eq!(program, "sh");
                assert_eq!(status, Some(3));
                assert_eq!(stderr, "no monitor");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages() {
        let not_found = ApplyError::NotFound {
            program: "ddcutil".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "'ddcutil' is not installed or not in PATH"
        );

        let failed = ApplyError::Failed {
            program: "ddcutil".to_string(),
            status: Some(1),
            stderr: "No monitor detected".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "'ddcutil' exited with status 1: No monitor detected"
        );

        let killed = ApplyError::Failed {
            program: "ddcutil".to_string(),
            status: None,
            stderr: String::new(),
        };
        assert_eq!(killed.to_string(), "'ddcutil' was terminated by a signal");
    }

    #[test]
    fn test_command_settings_defaults() {
        let settings = CommandSettings::from_config(&Config::default());
        assert_eq!(settings.brightness_command, "ddcutil");
        assert_eq!(settings.brightness_feature_code, "10");
        assert_eq!(settings.theme_command, "plasma-apply-colorscheme");
    }
}
