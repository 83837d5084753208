use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use kotoba_config::Config;

/// Resolve the configuration.
///
/// An explicit path (or `KOTOBA_CONFIG`) must exist; without one the defaults
/// are used. Environment overrides are applied last in both cases.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| env::var_os("KOTOBA_CONFIG").map(PathBuf::from));

    match path {
        Some(path) => Ok(load_config_file(&path)?.with_env_overrides()),
        None => Ok(Config::new()),
    }
}

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kotoba.json");
        fs::write(&path, r#"{ "tokenizer": { "ignore_space": true } }"#).unwrap();

        let config = load_config_file(&path).unwrap();

        assert!(config.tokenizer.ignore_space);
        assert_eq!(config.dictionary.editions.len(), 2);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.json")));

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to open config file"));
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kotoba.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_config_file(&path).is_err());
    }
}
