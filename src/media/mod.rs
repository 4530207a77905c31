// SPDX-License-Identifier: MPL-2.0
//! Media type detection for files handed over by the file picker or dropped
//! on the window.
//!
//! The picker never filters by itself: every file is tagged with a media type
//! here and the upload form decides which ones to keep.

pub mod picked;

use std::path::Path;

pub use picked::{load_picked_file, load_picked_files, PickedFile};

/// Media type for SVG documents, which the raster sniffer cannot recognise.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Media type assigned when neither the extension nor the content is known.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Supported media extensions
pub mod extensions {
    /// Image file extensions offered by the open dialog filter.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg", "avif",
    ];
}

/// Detects the media type of a file from the extension of `name`, sniffing
/// the content only when the name has no extension.
///
/// A known extension decides on its own, so `notes.txt` stays a non-image
/// even when its first bytes look like a bitmap header. Sniffing accepts only
/// formats whose signature is long enough not to match plain text.
#[must_use]
pub fn detect_media_type(name: &str, bytes: &[u8]) -> String {
    let extension = Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("svg") | Some("svgz") => SVG_MEDIA_TYPE.to_string(),
        Some(ext) => image_rs::ImageFormat::from_extension(ext)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string()),
        None => sniff_media_type(bytes).unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string()),
    }
}

fn sniff_media_type(bytes: &[u8]) -> Option<String> {
    use image_rs::ImageFormat;

    match image_rs::guess_format(bytes).ok()? {
        format @ (ImageFormat::Png
        | ImageFormat::Jpeg
        | ImageFormat::Gif
        | ImageFormat::WebP
        | ImageFormat::Tiff
        | ImageFormat::Avif) => Some(format.to_mime_type().to_string()),
        _ => None,
    }
}

/// Returns true when the media type denotes image content.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Returns true when the media type is SVG and needs a vector preview.
#[must_use]
pub fn is_svg_media_type(media_type: &str) -> bool {
    media_type == SVG_MEDIA_TYPE
}
