// SPDX-License-Identifier: MPL-2.0
//! Multipart upload of a submitted claim.
//!
//! One submission is one `POST` with a `multipart/form-data` body:
//! - `email`: text field with the address exactly as typed
//! - `images`: one file part per selected image, in selection order
//!
//! Any 2xx status is success. The response body is never read.

use crate::error::TransportError;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Name of the text field carrying the email address.
pub const EMAIL_FIELD: &str = "email";

/// Name shared by every image file part.
pub const IMAGES_FIELD: &str = "images";

const USER_AGENT: &str = concat!("ClaimUploader/", env!("CARGO_PKG_VERSION"));

/// One image file inside an upload request.
#[derive(Debug, Clone)]
pub struct UploadPart {
    pub name: String,
    pub media_type: String,
    pub data: Bytes,
}

/// Owned snapshot of the form taken when a submission starts.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub email: String,
    pub images: Vec<UploadPart>,
}

impl UploadRequest {
    /// Builds the multipart body.
    fn into_form(self) -> Result<Form, TransportError> {
        let mut form = Form::new().text(EMAIL_FIELD, self.email);
        for image in self.images {
            let length = image.data.len() as u64;
            let part = Part::stream_with_length(image.data, length)
                .file_name(image.name.clone())
                .mime_str(&image.media_type)
                .map_err(|_| TransportError::InvalidPart(image.name))?;
            form = form.part(IMAGES_FIELD, part);
        }
        Ok(form)
    }
}

/// HTTP client bound to the configured upload endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for `endpoint`.
    ///
    /// Without a `timeout` the client's default behavior applies.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the request as a single multipart `POST`.
    pub async fn upload(&self, request: UploadRequest) -> Result<(), TransportError> {
        let image_count = request.images.len();
        let form = request.into_form()?;

        tracing::info!(endpoint = %self.endpoint, images = image_count, "uploading claim");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "upload rejected by endpoint");
            return Err(TransportError::Status(status.as_u16()));
        }

        tracing::info!(status = status.as_u16(), "upload accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str, media_type: &str) -> UploadPart {
        UploadPart {
            name: name.to_string(),
            media_type: media_type.to_string(),
            data: Bytes::from_static(&[1, 2, 3]),
        }
    }

    #[test]
    fn into_form_accepts_valid_parts() {
        let request = UploadRequest {
            email: "a@b.com".into(),
            images: vec![part("a.png", "image/png"), part("b.jpg", "image/jpeg")],
        };
        assert!(request.into_form().is_ok());
    }

    #[test]
    fn into_form_rejects_malformed_media_type() {
        let request = UploadRequest {
            email: "a@b.com".into(),
            images: vec![part("broken.png", "not a mime")],
        };
        match request.into_form() {
            Err(TransportError::InvalidPart(name)) => assert_eq!(name, "broken.png"),
            other => panic!("expected InvalidPart, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn new_keeps_endpoint() {
        let transport = HttpTransport::new("http://127.0.0.1:9/upload", None)
            .expect("client should build");
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/upload");
    }
}
