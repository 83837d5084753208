use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use kotoba_core::content::RawEntry;
use kotoba_core::dictionary::LoadError;

const SHARD_PREFIX: &str = "term_bank_";
const SHARD_SUFFIX: &str = ".json";

pub struct TermBankLoader;

impl TermBankLoader {
    /// Load a bundle by its root name under `base`.
    ///
    /// Prefers a pre-combined `<file>.json`, then an unpacked `<file>/`
    /// directory of `term_bank_<N>.json` shards.
    pub fn load_bundle(base: &Path, file: &str) -> Result<Vec<RawEntry>, LoadError> {
        let combined = base.join(format!("{file}.json"));
        if combined.is_file() {
            return Self::load_combined(&combined);
        }

        let shards = base.join(file);
        if shards.is_dir() {
            return Self::load_shards(&shards);
        }

        Err(LoadError::FileNotFound(format!(
            "{} (or directory {})",
            combined.display(),
            shards.display()
        )))
    }

    /// Load a single JSON array of records
    pub fn load_combined(path: &Path) -> Result<Vec<RawEntry>, LoadError> {
        tracing::info!("Loading term bank from file: {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<RawEntry> = serde_json::from_reader(reader)?;
        tracing::info!("Loaded {} term bank entries from file", entries.len());
        Ok(entries)
    }

    /// Concatenate every `term_bank_<N>.json` shard in `dir`, in ascending `N`
    pub fn load_shards(dir: &Path) -> Result<Vec<RawEntry>, LoadError> {
        let mut shards: Vec<(u32, PathBuf)> = Vec::new();
        for dir_entry in fs::read_dir(dir)? {
            let path = dir_entry?.path();
            let number = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(shard_number);
            if let Some(number) = number {
                shards.push((number, path));
            }
        }

        if shards.is_empty() {
            return Err(LoadError::InvalidFormat(format!(
                "no {SHARD_PREFIX}*{SHARD_SUFFIX} shards in {}",
                dir.display()
            )));
        }
        shards.sort_by_key(|(number, _)| *number);

        let mut entries = Vec::new();
        for (_, path) in &shards {
            tracing::debug!("Processing: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            let shard: Vec<RawEntry> = serde_json::from_reader(reader)?;
            entries.extend(shard);
        }

        tracing::info!(
            "Loaded {} term bank entries from {} shards in {}",
            entries.len(),
            shards.len(),
            dir.display()
        );
        Ok(entries)
    }

    /// Parse records from an in-memory JSON array
    pub fn from_json(json: &str) -> Result<Vec<RawEntry>, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn shard_number(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix(SHARD_PREFIX)?
        .strip_suffix(SHARD_SUFFIX)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, meaning: &str) -> String {
        format!(r#"["{word}","","","",0,["{meaning}"],0,""]"#)
    }

    #[test]
    fn test_shard_number() {
        assert_eq!(shard_number("term_bank_12.json"), Some(12));
        assert_eq!(shard_number("term_meta_bank_1.json"), None);
        assert_eq!(shard_number("index.json"), None);
        assert_eq!(shard_number("term_bank_x.json"), None);
    }

    #[test]
    fn test_combined_file_preferred() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bank.json"), format!("[{}]", record("猫", "cat"))).unwrap();
        fs::create_dir(dir.path().join("bank")).unwrap();

        let entries = TermBankLoader::load_bundle(dir.path(), "bank").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "猫");
    }

    #[test]
    fn test_shards_concatenated_in_numeric_order() {
        let dir = tempfile::tempdir().unwrap();
        let bank = dir.path().join("bank");
        fs::create_dir(&bank).unwrap();
        fs::write(bank.join("term_bank_10.json"), format!("[{}]", record("十", "ten"))).unwrap();
        fs::write(
            bank.join("term_bank_2.json"),
            format!("[{},{}]", record("二", "two"), record("弐", "two")),
        )
        .unwrap();
        fs::write(bank.join("index.json"), r#"{"title":"JMdict"}"#).unwrap();
        fs::write(bank.join("tag_bank_1.json"), "[]").unwrap();

        let entries = TermBankLoader::load_bundle(dir.path(), "bank").unwrap();
        let words: Vec<_> = entries.iter().map(|e| e.word.as_str()).collect();

        assert_eq!(words, vec!["二", "弐", "十"]);
    }

    #[test]
    fn test_missing_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let result = TermBankLoader::load_bundle(dir.path(), "absent");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_directory_without_shards() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bank")).unwrap();

        let result = TermBankLoader::load_bundle(dir.path(), "bank");
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn test_malformed_record_is_parse_error() {
        let result = TermBankLoader::from_json(r#"[["猫","ねこ"]]"#);
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }
}
