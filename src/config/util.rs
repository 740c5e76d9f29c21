//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory.
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/vellum.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    // First check if config_name is an absolute path
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    search_upward(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn search_upward(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Check if a link is external (has a URI scheme like `http:`, `mailto:`, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_search_upward_finds_in_ancestor() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("vellum.toml");
        fs::write(&config_path, "[site.info]\ntitle = \"Test\"\n").expect("write config");

        let nested = dir.path().join("content").join("posts");
        fs::create_dir_all(&nested).expect("create nested dirs");

        let found = search_upward(&nested, Path::new("vellum.toml")).expect("should find config");
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_search_upward_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(search_upward(dir.path(), Path::new("vellum.toml")).is_none());
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("xmpp:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link(":missing-scheme"));
    }
}
