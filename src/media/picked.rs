// SPDX-License-Identifier: MPL-2.0
//! Files chosen by the user, read into memory.

use crate::error::Result;
use crate::media::{detect_media_type, is_image_media_type};
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// A file produced by the open dialog or a window drop: display name, media
/// type tag and binary content.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub name: String,
    pub media_type: String,
    /// Shared so that the form state and an in-flight upload can hold the
    /// same bytes without copying.
    pub data: Bytes,
}

impl PickedFile {
    /// Builds a picked file and detects its media type from the content.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        let name = name.into();
        let media_type = detect_media_type(&name, &data);
        Self {
            name,
            media_type,
            data: Bytes::from(data),
        }
    }

    /// Builds a picked file with an already known media type.
    pub fn with_media_type(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data: Bytes::from(data),
        }
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Reads a single file into memory.
pub async fn load_picked_file(path: &Path) -> Result<PickedFile> {
    let data = tokio::fs::read(path).await?;
    Ok(PickedFile::new(display_name(path), data))
}

/// Reads every path in order. Unreadable entries (directories, permission
/// errors, vanished files) are logged and skipped.
pub async fn load_picked_files(paths: Vec<PathBuf>) -> Vec<PickedFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match load_picked_file(&path).await {
            Ok(file) => {
                tracing::debug!(
                    name = %file.name,
                    media_type = %file.media_type,
                    bytes = file.data.len(),
                    "file read"
                );
                files.push(file);
            }
            Err(err) => tracing::warn!(path = %path.display(), "skipping unreadable file: {err}"),
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_detects_media_type() {
        let file = PickedFile::new("scan.png", b"\x89PNG\r\n\x1a\n".to_vec());
        assert_eq!(file.media_type, "image/png");
        assert!(file.is_image());
    }

    #[test]
    fn with_media_type_keeps_given_tag() {
        let file = PickedFile::with_media_type("notes.txt", "text/plain", b"hi".to_vec());
        assert_eq!(file.media_type, "text/plain");
        assert!(!file.is_image());
    }

    #[tokio::test]
    async fn load_picked_files_skips_unreadable_entries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("photo.png");
        std::fs::write(&image_path, b"\x89PNG\r\n\x1a\n").expect("write png");
        let missing = temp_dir.path().join("missing.jpg");

        let files = load_picked_files(vec![
            missing,
            image_path,
            temp_dir.path().to_path_buf(),
        ])
        .await;

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "photo.png");
        assert_eq!(files[0].media_type, "image/png");
    }
}
