use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sweeper_core::SaveStore;

/// Keeps each slot as a JSON file inside one directory.
#[derive(Clone, Debug)]
pub(crate) struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        self.dir.join(name).with_extension("json")
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveStore for FileStore {
    type Error = io::Error;

    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) => {
                log::debug!("No saved game at {}: {}", path.display(), err);
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: String) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, value)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}
