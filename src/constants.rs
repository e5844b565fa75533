//! Application constants and default values for sunbright.
//!
//! Configuration defaults, validation limits and process exit codes used
//! throughout the application.

// ═══ Brightness Curve Defaults ═══
// Used when the config file does not specify a value

pub const DEFAULT_MIN_BRIGHTNESS: i32 = 20; // percent, applied at or below min_altitude
pub const DEFAULT_MAX_BRIGHTNESS: i32 = 80; // percent, applied at or above max_altitude
pub const DEFAULT_MIN_ALTITUDE: f64 = -15.0; // degrees, well into nautical twilight
pub const DEFAULT_MAX_ALTITUDE: f64 = 60.0; // degrees
pub const DEFAULT_DARK_COMPENSATION: i32 = 15; // percent added while the dark theme is active

// ═══ Theme Defaults ═══
// Run 'plasma-apply-colorscheme --list-schemes' to see available color schemes

pub const DEFAULT_LIGHT_THEME: &str = "BreezeLight";
pub const DEFAULT_DARK_THEME: &str = "BreezeDark";

// ═══ External Commands ═══
// Run 'ddcutil capabilities' to check if your monitor supports brightness control

pub const DEFAULT_BRIGHTNESS_COMMAND: &str = "ddcutil";
pub const DEFAULT_BRIGHTNESS_FEATURE_CODE: &str = "10"; // VCP 0x10: luminance
pub const DEFAULT_THEME_COMMAND: &str = "plasma-apply-colorscheme";

// ═══ Validation Limits ═══

pub const MINIMUM_BRIGHTNESS: i32 = 0;
pub const MAXIMUM_BRIGHTNESS: i32 = 100;

pub const MINIMUM_ALTITUDE: f64 = -90.0;
pub const MAXIMUM_ALTITUDE: f64 = 90.0;

pub const MINIMUM_DARK_COMPENSATION: i32 = -100;
pub const MAXIMUM_DARK_COMPENSATION: i32 = 100;

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// ═══ Files ═══

pub const CONFIG_DIR_NAME: &str = "sunbright";
pub const CONFIG_FILE_NAME: &str = "sunbright.toml";

/// Format accepted by `--at`
pub const AT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ═══ Exit Codes ═══

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

// ═══ Test Constants ═══
