//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/app/blog/   ← start
/// /home/user/site/vigor.toml  ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app").join("blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("vigor.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("vigor.toml")).unwrap();
        assert_eq!(found, dir.path().join("vigor.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("vigor.toml"), "").unwrap();
        fs::write(nested.join("vigor.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("vigor.toml")).unwrap();
        assert_eq!(found, nested.join("vigor.toml"));
    }

    #[test]
    fn test_find_config_absolute_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert_eq!(find_config_file(dir.path(), &missing), None);
    }
}
