//! Gallery / Solution Model
//!
//! Gallery items double as the public solutions showcase; solutions carry
//! an industry and a feature list, and collect visitor ratings.

use serde::{Deserialize, Serialize};

use super::split_comma_list;
use crate::error::{AppError, ErrorCode};

/// Gallery item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub industry: Option<String>,
    pub features: Vec<String>,
    pub image_url: String,
    /// Object storage key, needed to delete the stored image
    pub image_key: String,
    pub created_at: i64,
}

/// Text fields of a gallery upload (the image travels alongside)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryItemCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub industry: Option<String>,
    /// Raw comma-separated form value
    pub features: Option<String>,
}

impl GalleryItemCreate {
    /// Title, description and category are all required, and so is the image
    pub fn validate(&self, has_image: bool) -> Result<(), AppError> {
        let missing = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty());

        if let Some((field, _)) = missing {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "All fields are required including image",
            )
            .with_detail("field", field));
        }
        if !has_image {
            return Err(AppError::with_message(
                ErrorCode::NoFileProvided,
                "All fields are required including image",
            ));
        }
        Ok(())
    }

    pub fn feature_list(&self) -> Vec<String> {
        self.features
            .as_deref()
            .map(split_comma_list)
            .unwrap_or_default()
    }

    pub fn industry(&self) -> Option<String> {
        self.industry
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Visitor rating of a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Rating {
    pub id: i64,
    pub gallery_id: i64,
    pub rating: i32,
    pub timestamp: i64,
}

/// Rating submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingCreate {
    pub rating: i32,
}

impl RatingCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::new(ErrorCode::InvalidRating).with_detail("value", self.rating));
        }
        Ok(())
    }
}
