//! In-memory port implementations shared by the service tests.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use homewatch_domain::error::{HomewatchError, NotFoundError};
use homewatch_domain::image::ImageSize;
use homewatch_domain::time::Timestamp;

use crate::ports::{DirEntry, FileSystem, ImageRenderer};

#[derive(Default)]
pub struct InMemoryFs {
    files: Mutex<HashMap<PathBuf, (Vec<u8>, Timestamp)>>,
}

impl InMemoryFs {
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.with_file_at(path, content, homewatch_domain::time::now())
    }

    pub fn with_file_at(
        self,
        path: impl Into<PathBuf>,
        content: impl Into<Vec<u8>>,
        modified: Timestamp,
    ) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), (content.into(), modified));
        self
    }

    fn lookup(&self, path: &Path) -> Result<Vec<u8>, HomewatchError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(content, _)| content.clone())
            .ok_or_else(|| {
                NotFoundError {
                    kind: "File",
                    name: path.display().to_string(),
                }
                .into()
            })
    }
}

impl FileSystem for InMemoryFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, HomewatchError>> + Send {
        let result = self
            .lookup(path)
            .and_then(|bytes| String::from_utf8(bytes).map_err(HomewatchError::io));
        async { result }
    }

    fn read_bytes(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send {
        let result = self.lookup(path);
        async { result }
    }

    fn list_files(
        &self,
        dir: &Path,
    ) -> impl Future<Output = Result<Vec<DirEntry>, HomewatchError>> + Send {
        let files = self.files.lock().unwrap();
        let entries: Vec<DirEntry> = files
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .filter_map(|(path, (_, modified))| {
                Some(DirEntry {
                    name: path.file_name()?.to_string_lossy().into_owned(),
                    modified: *modified,
                })
            })
            .collect();
        let result = if entries.is_empty() {
            Err(NotFoundError {
                kind: "Directory",
                name: dir.display().to_string(),
            }
            .into())
        } else {
            Ok(entries)
        };
        async { result }
    }
}

/// Renderer that tags the input with the requested size.
pub struct TaggingRenderer;

impl ImageRenderer for TaggingRenderer {
    fn render(
        &self,
        jpeg: Vec<u8>,
        size: ImageSize,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send {
        let result = if jpeg.starts_with(&[0xFF, 0xD8]) {
            let mut out = jpeg;
            out.push(match size {
                ImageSize::Full => b'F',
                ImageSize::Half => b'H',
            });
            Ok(out)
        } else {
            Err(HomewatchError::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a jpeg",
            )))
        };
        async { result }
    }
}
