//! Amazon preview page domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::design::Design;

/// One saved product preview page together with its bulletpoints.
///
/// This is the shape handed to templates, so field names match the
/// template variables.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Amazon {
    pub id: i64,
    pub design_id: String,

    pub product_image: Option<String>,
    pub product_image_caption: String,
    pub product_title: String,
    pub product_subtitle: String,
    pub product_content: String,

    pub company_image: Option<String>,
    pub company_image_caption: String,
    pub company_title: String,
    pub company_subtitle: String,
    pub company_content: String,

    /// Product bulletpoints in submission order.
    pub product_points: Vec<String>,
    /// Company bulletpoints in submission order.
    pub company_points: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amazon {
    /// Resolves the stored design id, if it still names a known design.
    pub fn design(&self) -> Option<Design> {
        self.design_id.parse().ok()
    }
}

/// Row shown on the index page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AmazonSummary {
    pub id: i64,
    pub design_id: String,
    pub product_title: String,
    pub company_title: String,
    pub updated_at: DateTime<Utc>,
}
