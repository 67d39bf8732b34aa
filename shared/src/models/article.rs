//! Article Model

use serde::{Deserialize, Serialize};

use super::{require, split_comma_list};
use crate::error::AppError;

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create/update article payload
///
/// `tags` arrives as the raw comma-separated form value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub published: bool,
}

impl ArticleInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        require("category", &self.category)?;
        Ok(())
    }

    pub fn tag_list(&self) -> Vec<String> {
        split_comma_list(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_parsed_from_form_value() {
        let input = ArticleInput {
            title: "Edge AI".into(),
            content: "...".into(),
            category: "Tech".into(),
            tags: "ai,  edge , ,iot".into(),
            published: true,
        };
        assert!(input.validate().is_ok());
        assert_eq!(input.tag_list(), vec!["ai", "edge", "iot"]);
    }

    #[test]
    fn published_defaults_to_false() {
        let input: ArticleInput = serde_json::from_str(
            r#"{"title":"t","content":"c","category":"News"}"#,
        )
        .unwrap();
        assert!(!input.published);
        assert!(input.tag_list().is_empty());
    }

    #[test]
    fn category_is_required() {
        let input = ArticleInput {
            title: "t".into(),
            content: "c".into(),
            category: "".into(),
            tags: String::new(),
            published: false,
        };
        assert!(input.validate().is_err());
    }
}
