//! Small helpers shared across modules.

use std::path::Path;

/// Render a path with the home directory replaced by `~`.
///
/// Used in user-facing messages so logs and bug reports don't leak the
/// username.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", stripped.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_private_path_replaces_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let path = home.join(".config").join("sunbright").join("sunbright.toml");
        assert_eq!(private_path(&path), "~/.config/sunbright/sunbright.toml");
        assert_eq!(private_path(&home), "~");
    }

    #[test]
    fn test_private_path_leaves_other_paths() {
        let path = PathBuf::from("/etc/sunbright.toml");
        if dirs::home_dir().is_some_and(|home| path.starts_with(home)) {
            return;
        }
        assert_eq!(private_path(&path), "/etc/sunbright.toml");
    }
}
