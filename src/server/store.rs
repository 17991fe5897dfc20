use std::io;
use std::path::{Path, PathBuf};

/// Byte provider backing the static file fallback.
///
/// Keys are route-resolved targets with the leading separator stripped,
/// looked up relative to the document root.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Reads the full contents of `key` in binary mode.
    ///
    /// `ErrorKind::NotFound` is the one failure callers treat as a
    /// normal outcome; everything else is unexpected.
    pub async fn read(&self, key: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(key)).await
    }
}
