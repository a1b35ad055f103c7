//! Archived videos — display names derived from file names.
//!
//! The archiving process names files `<device>-<yyyymmdd>-<words...>.mp4`,
//! e.g. `gartencam-20180823-drecksau.mp4` becomes `"23.08.2018 Drecksau"`.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, format_day};

/// One entry of the video listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub name: String,
    pub file: String,
}

/// A directory entry as seen by the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    pub file: String,
    pub modified: Timestamp,
}

/// Upper-case the first character of `word`.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the caption words of a file name: the extension is removed, the
/// name is split on `-` and the device and date tokens are dropped.
#[must_use]
pub fn caption(file: &str) -> String {
    let stem = file.strip_suffix(".mp4").unwrap_or(file);
    stem.split('-')
        .skip(2)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a display name from an already formatted day and the file name.
#[must_use]
pub fn display_name(day: &str, file: &str) -> String {
    format!("{day} {}", caption(file)).trim().to_string()
}

impl VideoEntry {
    /// Build an entry using the local date of the file's modification time.
    #[must_use]
    pub fn from_file(video: &VideoFile) -> Self {
        Self {
            name: display_name(&format_day(video.modified), &video.file),
            file: video.file.clone(),
        }
    }
}

/// Sort files by modification time (oldest first, ties by name) and build
/// the listing.
#[must_use]
pub fn listing(mut files: Vec<VideoFile>) -> Vec<VideoEntry> {
    files.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.file.cmp(&b.file)));
    files.iter().map(VideoEntry::from_file).collect()
}
