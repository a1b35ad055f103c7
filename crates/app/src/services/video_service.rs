//! Video service — listing of the archived webcam videos.

use std::path::PathBuf;

use homewatch_domain::video::{VideoEntry, VideoFile, listing};

use crate::ports::FileSystem;

pub struct VideoService<F> {
    fs: F,
    dir: PathBuf,
}

impl<F: FileSystem> VideoService<F> {
    pub fn new(fs: F, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    /// All videos, oldest first. A missing directory yields an empty list.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn list(&self) -> Vec<VideoEntry> {
        let entries = match self.fs.list_files(&self.dir).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(error = ?err, "video directory unreadable");
                return Vec::new();
            }
        };
        listing(
            entries
                .into_iter()
                .map(|entry| VideoFile {
                    file: entry.name,
                    modified: entry.modified,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryFs;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn should_return_empty_list_when_directory_missing() {
        let service = VideoService::new(InMemoryFs::default(), "/videos");
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn should_sort_by_modification_time() {
        let older = Utc.with_ymd_and_hms(2018, 8, 23, 12, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2019, 5, 1, 12, 0, 0).unwrap();
        let fs = InMemoryFs::default()
            .with_file_at("/videos/gartencam-20190501-igel.mp4", "", newer)
            .with_file_at("/videos/gartencam-20180823-drecksau.mp4", "", older)
            .with_file_at("/other/skip.mp4", "", older);

        let list = VideoService::new(fs, "/videos").list().await;

        let files: Vec<&str> = list.iter().map(|v| v.file.as_str()).collect();
        assert_eq!(
            files,
            vec![
                "gartencam-20180823-drecksau.mp4",
                "gartencam-20190501-igel.mp4"
            ]
        );
        assert!(list[0].name.ends_with(" Drecksau"));
    }
}
