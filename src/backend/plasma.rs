//! KDE Plasma color scheme switching through `plasma-apply-colorscheme`.
//!
//! Run `plasma-apply-colorscheme --list-schemes` to see the names accepted
//! as `light_theme` and `dark_theme`.

use super::{ApplyError, ThemeSink, run_command};

pub struct PlasmaColorScheme {
    program: String,
    debug_enabled: bool,
}

impl PlasmaColorScheme {
    pub fn new(program: &str, debug_enabled: bool) -> Self {
        Self {
            program: program.to_string(),
            debug_enabled,
        }
    }
}

impl ThemeSink for PlasmaColorScheme {
    fn apply_theme(&mut self, theme_name: &str) -> Result<(), ApplyError> {
        run_command(&self.program, &[theme_name.to_string()], self.debug_enabled)
    }

    fn backend_name(&self) -> &'static str {
        "plasma"
    }
}
