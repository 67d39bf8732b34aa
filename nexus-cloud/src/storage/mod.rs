//! Object storage for uploaded site images
//!
//! Objects live at `s3://{bucket}/{key}` and are served publicly from
//! `{public_base_url}/{key}`. Only put and delete are needed.

use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;

/// Object storage failure
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object upload failed: {0}")]
    Upload(String),
    #[error("object delete failed: {0}")]
    Delete(String),
}

/// S3-backed object store
#[derive(Clone)]
pub struct ObjectStore {
    client: S3Client,
    bucket: String,
    public_base_url: String,
}

impl ObjectStore {
    pub fn new(client: S3Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url,
        }
    }

    /// Upload bytes under `key`, returning the public download URL
    pub async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        tracing::info!(key = %key, size, "Object stored");
        Ok(public_url(&self.public_base_url, key))
    }

    /// Delete the object under `key`
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete(e.to_string()))?;

        tracing::info!(key = %key, "Object deleted");
        Ok(())
    }
}

/// Public URL of a stored object
pub fn public_url(base: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

/// Content type for a supported image extension
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_joins_cleanly() {
        assert_eq!(
            public_url("https://cdn.nexus.io/", "/gallery/1_a.png"),
            "https://cdn.nexus.io/gallery/1_a.png"
        );
        assert_eq!(
            public_url("https://cdn.nexus.io", "gallery/1_a.png"),
            "https://cdn.nexus.io/gallery/1_a.png"
        );
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type_for("jpeg"), "image/jpeg");
        assert_eq!(content_type_for("webp"), "image/webp");
        assert_eq!(content_type_for("tiff"), "application/octet-stream");
    }
}
