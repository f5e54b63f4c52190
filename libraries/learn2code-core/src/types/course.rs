/// Course catalog types
use crate::types::CourseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A course as listed in the public catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier
    pub id: CourseId,

    /// Display title
    pub title: String,

    /// Marketing description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price in the store currency
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Cover image URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Whether the course is currently sold
    #[serde(default = "default_active", alias = "active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Course {
    /// Create an active course with no description or image
    pub fn new(id: CourseId, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            price,
            image_url: None,
            is_active: true,
        }
    }
}
