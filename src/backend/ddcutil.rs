//! Monitor brightness control through `ddcutil`.
//!
//! `ddcutil setvcp <feature> <value>` writes a VCP feature over DDC/CI. Feature
//! `10` is luminance on virtually every monitor that supports DDC/CI; run
//! `ddcutil capabilities` to check.

use super::{ApplyError, BrightnessSink, run_command};
use crate::core::clamp_percentage;

pub struct DdcutilBrightness {
    program: String,
    feature_code: String,
    debug_enabled: bool,
}

impl DdcutilBrightness {
    pub fn new(program: &str, feature_code: &str, debug_enabled: bool) -> Self {
        Self {
            program: program.to_string(),
            feature_code: feature_code.to_string(),
            debug_enabled,
        }
    }

    /// Arguments passed to the program for a brightness value.
    pub fn args_for(&self, value: u8) -> Vec<String> {
        vec![
            "setvcp".to_string(),
            self.feature_code.clone(),
            clamp_percentage(i32::from(value)).to_string(),
        ]
    }
}

impl BrightnessSink for DdcutilBrightness {
    fn apply_brightness(&mut self, value: u8) -> Result<(), ApplyError> {
        run_command(&self.program, &self.args_for(value), self.debug_enabled)
    }

    fn backend_name(&self) -> &'static str {
        "ddcutil"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_use_feature_code_and_value() {
        let sink = DdcutilBrightness::new("ddcutil", "10", false);
        assert_eq!(sink.args_for(43), vec!["setvcp", "10", "43"]);
    }

    #[test]
    fn test_args_clamp_value() {
        let sink = DdcutilBrightness::new("ddcutil", "0x10", false);
        assert_eq!(sink.args_for(250), vec!["setvcp", "0x10", "100"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_with_succeeding_program() {
        let mut sink = DdcutilBrightness::new("true", "10", false);
        assert!(sink.apply_brightness(50).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_with_failing_program() {
        let mut sink = DdcutilBrightness::new("false", "10", false);
        assert!(matches!(
            sink.apply_brightness(50),
            Err(ApplyError::Failed { .. })
        ));
    }
}
