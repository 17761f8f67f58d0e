//! Value-table persistence.
//!
//! Tables are stored as bincode. The encoding is opaque to the rest of the
//! crate; callers only see [`encode`]/[`decode`] and the file helpers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::agents::ValueTable;
use crate::error::PersistenceError;

/// File name a named agent's policy is stored under.
#[must_use]
pub fn policy_file_name(agent_name: &str) -> String {
    format!("policy_{agent_name}.bin")
}

/// Path of `agent_name`'s policy inside `dir`.
#[must_use]
pub fn policy_path(dir: &Path, agent_name: &str) -> PathBuf {
    dir.join(policy_file_name(agent_name))
}

pub fn encode(table: &ValueTable) -> Result<Vec<u8>, PersistenceError> {
    bincode::serialize(table).map_err(PersistenceError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<ValueTable, PersistenceError> {
    bincode::deserialize(bytes).map_err(PersistenceError::Decode)
}

/// Write `table` to `path`, creating parent directories as needed.
pub fn save(table: &ValueTable, path: &Path) -> Result<(), PersistenceError> {
    let bytes = encode(table)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saved {} states to {}", table.len(), path.display());
    Ok(())
}

/// Read a table previously written by [`save`].
pub fn load(path: &Path) -> Result<ValueTable, PersistenceError> {
    let bytes = fs::read(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = decode(&bytes)?;
    log::info!("loaded {} states from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn sample_table() -> ValueTable {
        ["X........", "X...O....", "X...O...X"]
            .iter()
            .zip([0.1, -0.2, 0.75])
            .map(|(s, v)| (s.parse::<Board>().unwrap().canonical_hash(), v))
            .collect()
    }

    #[test]
    fn test_policy_path() {
        let path = policy_path(Path::new("policies"), "p1");
        assert_eq!(path, Path::new("policies").join("policy_p1.bin"));
    }

    #[test]
    fn test_encode_decode() {
        let table = sample_table();
        let bytes = encode(&table).unwrap();
        assert_eq!(decode(&bytes).unwrap(), table);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, PersistenceError::Decode(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("policy_p1.bin");
        let table = sample_table();

        save(&table, &path).unwrap();
        assert!(path.exists());
        assert_eq!(load(&path).unwrap(), table);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.bin")).unwrap_err();
        assert!(matches!(err, PersistenceError::Read { .. }));
    }
}
