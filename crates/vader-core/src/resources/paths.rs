//! Locating the lexicon and idiom files.

use std::path::{Path, PathBuf};

use crate::config::ResourceConfig;

pub const LEXICON_FILE: &str = "vader_sentiment_lexicon.txt";
pub const IDIOMS_FILE: &str = "vader_idioms.txt";

/// Resolved locations of the two resource files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub lexicon: PathBuf,
    pub idioms: PathBuf,
}

impl ResourcePaths {
    /// Resolve from explicit overrides, then the environment, then the
    /// default directories (`./resources`, `~/.vader/resources`).
    pub fn resolve(lexicon: Option<&Path>, idioms: Option<&Path>) -> Self {
        Self::resolve_with(&ResourceConfig::from_env(), lexicon, idioms)
    }

    pub fn resolve_with(cfg: &ResourceConfig, lexicon: Option<&Path>, idioms: Option<&Path>) -> Self {
        let dirs = candidate_dirs(cfg);
        Self {
            lexicon: pick(lexicon, cfg.lexicon.as_deref(), &dirs, LEXICON_FILE),
            idioms: pick(idioms, cfg.idioms.as_deref(), &dirs, IDIOMS_FILE),
        }
    }
}

fn candidate_dirs(cfg: &ResourceConfig) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(ref d) = cfg.resource_dir {
        dirs.push(PathBuf::from(d));
    }
    dirs.push(PathBuf::from("resources"));
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join(".vader").join("resources"));
    }
    dirs
}

/// First existing candidate wins; with none existing, the first candidate is
/// returned so the eventual "not found" error names the expected location.
fn pick(explicit: Option<&Path>, from_env: Option<&str>, dirs: &[PathBuf], file: &str) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Some(p) = from_env {
        return PathBuf::from(p);
    }
    let candidates: Vec<PathBuf> = dirs.iter().map(|d| d.join(file)).collect();
    candidates
        .iter()
        .find(|p| p.is_file())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths_win() {
        let cfg = ResourceConfig {
            lexicon: Some("/env/lexicon.txt".to_string()),
            idioms: None,
            resource_dir: None,
        };
        let paths = ResourcePaths::resolve_with(
            &cfg,
            Some(Path::new("/cli/lexicon.txt")),
            Some(Path::new("/cli/idioms.txt")),
        );
        assert_eq!(paths.lexicon, PathBuf::from("/cli/lexicon.txt"));
        assert_eq!(paths.idioms, PathBuf::from("/cli/idioms.txt"));
    }

    #[test]
    fn test_env_path_beats_directory() {
        let cfg = ResourceConfig {
            lexicon: Some("/env/lexicon.txt".to_string()),
            idioms: None,
            resource_dir: Some("/env/dir".to_string()),
        };
        let paths = ResourcePaths::resolve_with(&cfg, None, None);
        assert_eq!(paths.lexicon, PathBuf::from("/env/lexicon.txt"));
        assert_eq!(paths.idioms, PathBuf::from("/env/dir").join(IDIOMS_FILE));
    }

    #[test]
    fn test_existing_file_in_resource_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LEXICON_FILE), "good\t1.9\t0.9\t[]\n").unwrap();
        let cfg = ResourceConfig {
            lexicon: None,
            idioms: None,
            resource_dir: Some(dir.path().to_string_lossy().to_string()),
        };
        let paths = ResourcePaths::resolve_with(&cfg, None, None);
        assert_eq!(paths.lexicon, dir.path().join(LEXICON_FILE));
    }
}
