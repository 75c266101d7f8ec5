//! Persistence for the saved-episode collection.
//!
//! One JSON file holding the ordered array of episode ids, rewritten in full
//! on every toggle. Read and write failures are logged and degrade to "no
//! persisted state"; they are never surfaced to the user.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load the saved ids. Absent or malformed data loads as an empty list.
pub fn load(path: &Path) -> Vec<u32> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), "No saved-episode file: {err}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<u32>>(&data) {
        Ok(ids) => {
            debug!(count = ids.len(), "Hydrated saved episodes");
            ids
        }
        Err(err) => {
            warn!(path = %path.display(), "Discarding malformed saved-episode data: {err}");
            Vec::new()
        }
    }
}

/// Write the full id list back. Failures keep the in-memory state
/// authoritative and are only logged.
pub fn store(path: &Path, ids: &[u32]) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Could not create storage directory: {err}");
            return;
        }
    }
    match serde_json::to_string(ids) {
        Ok(contents) => {
            if let Err(err) = fs::write(path, contents) {
                warn!(path = %path.display(), "Failed to persist saved episodes: {err}");
            }
        }
        Err(err) => warn!("Failed to encode saved episodes: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("saved_episodes.json")).is_empty());
    }

    #[test]
    fn malformed_data_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_episodes.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn round_trips_ids_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("saved_episodes.json");
        store(&path, &[2, 5]);
        assert_eq!(load(&path), vec![2, 5]);

        store(&path, &[5]);
        assert_eq!(load(&path), vec![5]);
    }
}
