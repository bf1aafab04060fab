//! Runtime configuration from environment variables.
//!
//! - `TERMTRIS_HIGHSCORE_PATH`: highscore file (default: `highscore.txt`)
//! - `TERMTRIS_SEED`: fixed u64 seed for piece selection (default: entropy)
//! - `TERMTRIS_LOG_PATH`: append logs to this file (default: no logging)
//!
//! Unparseable values fall back to the default.

use std::env;
use std::path::PathBuf;

use crate::types::HIGHSCORE_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub highscore_path: PathBuf,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        Self {
            highscore_path: non_empty("TERMTRIS_HIGHSCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.highscore_path),
            seed: non_empty("TERMTRIS_SEED").and_then(|v| v.trim().parse().ok()),
            log_path: non_empty("TERMTRIS_LOG_PATH").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
        assert_eq!(AppConfig::default().highscore_path, PathBuf::from("highscore.txt"));
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TERMTRIS_HIGHSCORE_PATH", "/tmp/hs.txt"),
            ("TERMTRIS_SEED", " 42 "),
            ("TERMTRIS_LOG_PATH", "termtris.log"),
        ]));
        assert_eq!(cfg.highscore_path, PathBuf::from("/tmp/hs.txt"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path, Some(PathBuf::from("termtris.log")));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TERMTRIS_HIGHSCORE_PATH", "  "),
            ("TERMTRIS_SEED", "not-a-number"),
        ]));
        assert_eq!(cfg, AppConfig::default());
    }
}
