//! File-backed key-value store.
//!
//! Each key maps to `<key>.json` inside a single directory. Access goes
//! through a capability handle on that directory, so the store can never
//! touch paths outside it.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::board::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

const FILE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value store persisting each entry as a file in one directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> KeyValueStoreResult<Self> {
        let root = root.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(KeyValueStoreError::storage)?;
        let dir =
            Dir::open_ambient_dir(root, ambient_authority()).map_err(KeyValueStoreError::storage)?;
        Ok(Self {
            root: root.to_owned(),
            dir,
        })
    }

    /// Returns the directory backing the store.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Maps a key to its file name, rejecting anything that is not a plain
/// `[A-Za-z0-9_-]+` token.
fn file_name_for(key: &str) -> KeyValueStoreResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_valid {
        return Err(KeyValueStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::storage(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let file_name = file_name_for(key)?;
        let temp_name = format!("{file_name}.{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(KeyValueStoreError::storage)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(KeyValueStoreError::storage)
    }
}
