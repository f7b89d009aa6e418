//! Config file lookup
//!
//! `.fluxbox.toml` is searched in the working directory, then in `$HOME`.
//! The first readable file wins.

use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".fluxbox.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Candidate locations in lookup order
pub fn search_paths(cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    [cwd, home]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE))
        .collect()
}

/// Read the first candidate that exists
pub fn find_config_file<I>(candidates: I) -> Option<ConfigFile>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find_map(|path| match std::fs::read_to_string(&path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(ConfigFile { path, content })
        }
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    })
}

/// Look up the config file for this process (CWD, then `$HOME`)
pub fn load_config_file() -> Option<ConfigFile> {
    let cwd = env::current_dir().ok();
    let home = env::var_os("HOME").map(PathBuf::from);
    find_config_file(search_paths(cwd.as_deref(), home.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn dir_with_config(content: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
        dir
    }

    #[test]
    fn test_search_paths_order() {
        let paths = search_paths(Some(Path::new("/work")), Some(Path::new("/home/me")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/work/.fluxbox.toml"),
                PathBuf::from("/home/me/.fluxbox.toml"),
            ]
        );
        assert_eq!(search_paths(None, None), Vec::<PathBuf>::new());
    }

    #[test]
    fn test_cwd_config_wins_over_home() {
        let cwd = dir_with_config("log_level = \"debug\"");
        let home = dir_with_config("log_level = \"trace\"");

        let found = find_config_file(search_paths(Some(cwd.path()), Some(home.path()))).unwrap();
        assert_eq!(found.path, cwd.path().join(CONFIG_FILE));
        assert_eq!(found.content, "log_level = \"debug\"");
    }

    #[test]
    fn test_home_config_used_when_cwd_has_none() {
        let cwd = tempfile::tempdir().unwrap();
        let home = dir_with_config("stop_on_error = true");

        let found = find_config_file(search_paths(Some(cwd.path()), Some(home.path()))).unwrap();
        assert_eq!(found.path, home.path().join(CONFIG_FILE));
    }

    #[test]
    fn test_no_config_anywhere() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        assert_eq!(
            find_config_file(search_paths(Some(cwd.path()), Some(home.path()))),
            None
        );
    }
}
