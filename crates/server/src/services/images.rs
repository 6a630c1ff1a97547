//! Image host client.
//!
//! Uploads binaries to a Cloudinary-style host using an unsigned upload
//! preset and returns the durable URL plus metadata. The media library
//! record is written separately by the upload route; if that second step
//! fails, the hosted image exists without a library record - accepted as a
//! low-severity inconsistency.

use reqwest::multipart;
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::MediaHostConfig;

/// Errors from image host operations.
#[derive(Debug, Error)]
pub enum ImageHostError {
    /// Network-level failure talking to the host.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host answered with a non-success status.
    #[error("upload rejected: HTTP {0}")]
    Rejected(reqwest::StatusCode),
}

/// Result of a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    /// Durable URL of the stored image.
    #[serde(rename = "secure_url")]
    pub url: String,
    /// Host-side identifier for the asset.
    pub public_id: Option<String>,
    pub format: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub bytes: Option<i64>,
}

/// HTTP client for the image host.
#[derive(Clone)]
pub struct ImageHostClient {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl ImageHostClient {
    /// Create a client from the media host configuration.
    #[must_use]
    pub fn new(config: &MediaHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                config.cloud_name
            ),
            upload_preset: config.upload_preset.expose_secret().to_string(),
        }
    }

    /// Upload an image and return its durable URL and metadata.
    ///
    /// # Errors
    ///
    /// Returns `ImageHostError` if the request fails or the host rejects
    /// the upload.
    #[instrument(skip(self, data), fields(filename = %filename, size = data.len()))]
    pub async fn upload(
        &self,
        filename: String,
        data: Vec<u8>,
    ) -> Result<UploadedImage, ImageHostError> {
        let file_part = multipart::Part::bytes(data).file_name(filename);
        let form = multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", file_part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ImageHostError::Rejected(response.status()));
        }

        let image = response.json::<UploadedImage>().await?;
        tracing::info!(url = %image.url, "image uploaded");
        Ok(image)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_image_parses_host_response() {
        let body = serde_json::json!({
            "secure_url": "https://res.example.com/image/upload/v1/mado/abc.jpg",
            "public_id": "mado/abc",
            "format": "jpg",
            "width": 1920,
            "height": 1080,
            "bytes": 345_678
        });

        let image: UploadedImage = serde_json::from_value(body).unwrap();
        assert_eq!(image.url, "https://res.example.com/image/upload/v1/mado/abc.jpg");
        assert_eq!(image.public_id.as_deref(), Some("mado/abc"));
        assert_eq!(image.width, Some(1920));
    }

    #[test]
    fn test_uploaded_image_tolerates_missing_metadata() {
        let body = serde_json::json!({ "secure_url": "https://res.example.com/x.png" });
        let image: UploadedImage = serde_json::from_value(body).unwrap();
        assert!(image.format.is_none());
        assert!(image.bytes.is_none());
    }
}
