//! Backend that reports commands instead of running them.

use super::{
    ApplyError, BrightnessSink, CommandSettings, ThemeSink, ddcutil::DdcutilBrightness,
    display_command,
};

pub struct DryRun {
    commands: CommandSettings,
}

impl DryRun {
    pub fn new(commands: CommandSettings) -> Self {
        Self { commands }
    }
}

impl BrightnessSink for DryRun {
    fn apply_brightness(&mut self, value: u8) -> Result<(), ApplyError> {
        let args = DdcutilBrightness::new(
            &self.commands.brightness_command,
            &self.commands.brightness_feature_code,
            false,
        )
        .args_for(value);
        log_decorated!(
            "Would run: {}",
            display_command(&self.commands.brightness_command, &args)
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "dry run"
    }
}

impl ThemeSink for DryRun {
    fn apply_theme(&mut self, theme_name: &str) -> Result<(), ApplyError> {
        log_decorated!(
            "Would run: {}",
            display_command(&self.commands.theme_command, &[theme_name.to_string()])
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "dry run"
    }
}
