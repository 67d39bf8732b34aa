//! Gallery management: search, multipart image upload, delete
//!
//! POST /api/admin/gallery, multipart fields:
//! `title`, `description`, `category`, `industry?`, `features?` (comma list), `image`
//!
//! Images stored at: s3://{bucket}/gallery/{millis}_{filename}

use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query, State},
};
use http::HeaderMap;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::filter::search_gallery;
use shared::models::{GalleryItem, GalleryItemCreate};
use shared::upload::{
    MAX_UPLOAD_BYTES, SUPPORTED_IMAGE_FORMATS, UploadProgress, file_extension, storage_key,
};
use shared::util::{now_millis, snowflake_id};

use crate::auth::AdminIdentity;
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::storage::{ObjectStore, content_type_for};

use super::super::ApiResult;
use super::record_activity;

const KEY_PREFIX: &str = "gallery";

#[derive(Deserialize)]
pub struct GalleryQuery {
    pub search: Option<String>,
}

/// GET /api/admin/gallery?search=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> ApiResult<Vec<GalleryItem>> {
    let items = db::gallery::list(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(search_gallery(&items, query.search.as_deref())))
}

/// Uploaded image, fully buffered
struct ImageUpload {
    filename: String,
    data: Vec<u8>,
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::with_message(ErrorCode::InvalidRequest, format!("Multipart error: {e}"))
}

/// POST /api/admin/gallery
pub async fn upload(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<GalleryItem> {
    let expected = headers
        .get(http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let mut form = GalleryItemCreate::default();
    let mut image: Option<ImageUpload> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let filename = field.file_name().unwrap_or("image").to_string();
            let mut progress = UploadProgress::new(expected);
            let mut data = Vec::new();

            while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::with_message(
                        ErrorCode::FileTooLarge,
                        format!("File too large (max {}MB)", MAX_UPLOAD_BYTES / 1024 / 1024),
                    ));
                }
                data.extend_from_slice(&chunk);
                if let Some(percent) = progress.advance(chunk.len()) {
                    tracing::debug!(filename = %filename, percent, "Upload progress");
                }
            }
            tracing::debug!(filename = %filename, bytes = progress.received(), "Upload received");

            if !data.is_empty() {
                image = Some(ImageUpload { filename, data });
            }
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        match name.as_str() {
            "title" => form.title = value,
            "description" => form.description = value,
            "category" => form.category = value,
            "industry" => form.industry = Some(value),
            "features" => form.features = Some(value),
            _ => {}
        }
    }

    form.validate(image.is_some())?;
    let image = image.ok_or_else(|| AppError::new(ErrorCode::NoFileProvided))?;

    let ext = file_extension(&image.filename);
    if !SUPPORTED_IMAGE_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::with_message(
            ErrorCode::UnsupportedFileFormat,
            format!(
                "Unsupported format: {ext}. Supported: {}",
                SUPPORTED_IMAGE_FORMATS.join(", ")
            ),
        ));
    }

    let now = now_millis();
    let key = storage_key(KEY_PREFIX, now, &image.filename);
    let image_url = state
        .storage
        .put(&key, image.data, content_type_for(&ext))
        .await
        .map_err(ServiceError::from)?;

    let item = GalleryItem {
        id: snowflake_id(),
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        category: Some(form.category.trim().to_string()),
        industry: form.industry(),
        features: form.feature_list(),
        image_url,
        image_key: key,
        created_at: now,
    };

    if let Err(e) = db::gallery::create(&state.pool, &item).await {
        discard_orphan(&state.storage, &item.image_key).await;
        return Err(ServiceError::from(e).into());
    }

    record_activity(
        &state,
        "gallery_upload",
        &format!("Uploaded gallery item {}", item.title),
        &identity.email,
    )
    .await;
    Ok(Json(item))
}

/// Remove an object whose record never got written; failures are logged
/// and swallowed. Returns whether the object is gone.
async fn discard_orphan(storage: &ObjectStore, key: &str) -> bool {
    match storage.delete(key).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to remove orphaned gallery image");
            false
        }
    }
}

/// DELETE /api/admin/gallery/{id}
///
/// The stored image goes first, then the record (ratings cascade).
pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<bool> {
    let item = db::gallery::find_by_id(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::GalleryItemNotFound))?;

    state
        .storage
        .delete(&item.image_key)
        .await
        .map_err(ServiceError::from)?;
    db::gallery::delete(&state.pool, id)
        .await
        .map_err(ServiceError::from)?;

    record_activity(
        &state,
        "gallery_delete",
        &format!("Deleted gallery item {}", item.title),
        &identity.email,
    )
    .await;
    Ok(Json(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_store() -> ObjectStore {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                "test", "test", None, None, "static",
            ))
            .endpoint_url("http://127.0.0.1:1")
            .retry_config(aws_sdk_s3::config::retry::RetryConfig::disabled())
            .force_path_style(true)
            .build();
        ObjectStore::new(
            aws_sdk_s3::Client::from_conf(config),
            "test-bucket".into(),
            "https://cdn.test".into(),
        )
    }

    #[tokio::test]
    async fn failed_orphan_cleanup_is_reported_not_raised() {
        let store = unreachable_store();
        assert!(!discard_orphan(&store, "gallery/1_booth.png").await);
    }
}
