//! File system port — read access to the flat files the producers write.

use std::future::Future;
use std::path::Path;

use homewatch_domain::error::HomewatchError;
use homewatch_domain::time::Timestamp;

/// A regular file found in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Bare file name.
    pub name: String,
    /// Last modification time.
    pub modified: Timestamp,
}

/// Read-only access to files.
///
/// Missing paths are reported as [`HomewatchError::NotFound`].
pub trait FileSystem: Send + Sync {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, HomewatchError>> + Send;

    /// Read a whole file as bytes.
    fn read_bytes(&self, path: &Path)
    -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send;

    /// List the regular files of `dir`, in no particular order.
    fn list_files(
        &self,
        dir: &Path,
    ) -> impl Future<Output = Result<Vec<DirEntry>, HomewatchError>> + Send;
}
