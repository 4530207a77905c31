// SPDX-License-Identifier: MPL-2.0
//! Images held by the upload form.

use crate::media::{is_svg_media_type, PickedFile};
use crate::transport::UploadPart;
use bytes::Bytes;
use iced::widget::{image, svg};

/// Process-unique handle naming one selected image.
///
/// Only used so the zoom state can point at an entry; ordering and
/// duplicates are governed by position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    /// Creates a new unique image ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Display handle derived from the in-memory bytes.
///
/// Raster handles share the entry's buffer. SVG handles take their own
/// copy because the vector renderer wants a `Cow` slice. Decoding is
/// deferred to the renderer; the handle is dropped together with its entry.
#[derive(Debug, Clone)]
pub enum Preview {
    Raster(image::Handle),
    Vector(svg::Handle),
}

impl Preview {
    fn from_bytes(media_type: &str, data: &Bytes) -> Self {
        if is_svg_media_type(media_type) {
            Preview::Vector(svg::Handle::from_memory(data.to_vec()))
        } else {
            Preview::Raster(image::Handle::from_bytes(data.clone()))
        }
    }
}

/// A user-chosen image file with its display name.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    id: ImageId,
    name: String,
    media_type: String,
    data: Bytes,
    preview: Preview,
}

impl SelectedImage {
    pub(crate) fn from_picked(file: PickedFile) -> Self {
        let preview = Preview::from_bytes(&file.media_type, &file.data);
        Self {
            id: ImageId::new(),
            name: file.name,
            media_type: file.media_type,
            data: file.data,
            preview,
        }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub(crate) fn to_upload_part(&self) -> UploadPart {
        UploadPart {
            name: self.name.clone(),
            media_type: self.media_type.clone(),
            data: self.data.clone(),
        }
    }
}
