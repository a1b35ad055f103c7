//! `tokio::fs` implementation of [`FileSystem`].

use std::future::Future;
use std::path::Path;

use homewatch_app::ports::{DirEntry, FileSystem};
use homewatch_domain::error::HomewatchError;
use homewatch_domain::time::Timestamp;

use crate::error::FsError;

/// Reads files straight from the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl FileSystem for TokioFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, HomewatchError>> + Send {
        let path = path.to_path_buf();
        async move {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| FsError::at(&path, err))?;
            Ok(content)
        }
    }

    fn read_bytes(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send {
        let path = path.to_path_buf();
        async move {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|err| FsError::at(&path, err))?;
            Ok(bytes)
        }
    }

    fn list_files(
        &self,
        dir: &Path,
    ) -> impl Future<Output = Result<Vec<DirEntry>, HomewatchError>> + Send {
        let dir = dir.to_path_buf();
        async move {
            let mut reader = tokio::fs::read_dir(&dir)
                .await
                .map_err(|err| FsError::at(&dir, err))?;

            let mut entries = Vec::new();
            while let Some(entry) = reader.next_entry().await.map_err(FsError::from)? {
                let path = entry.path();
                // follows symlinks, so a link to a video is listed like the video
                let metadata = match tokio::fs::metadata(&path).await {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        tracing::debug!(path = %path.display(), %err, "skipping unreadable entry");
                        continue;
                    }
                };
                if !metadata.is_file() {
                    continue;
                }
                let modified = metadata.modified().map_err(FsError::from)?;
                entries.push(DirEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    modified: Timestamp::from(modified),
                });
            }
            Ok(entries)
        }
    }
}
