//! Amazon page entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{Amazon, AmazonSummary};
use sqlx::FromRow;

/// Database row mapping for the amazon table.
#[derive(Debug, Clone, FromRow)]
pub struct AmazonEntity {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AmazonEntity {
    /// Combines the row with its bulletpoints into the domain model.
    pub fn into_domain(self, product_points: Vec<String>, company_points: Vec<String>) -> Amazon {
        Amazon {
            id: self.id,
            design_id: self.design_id,
            product_image: self.product_image,
            product_image_caption: self.product_image_caption,
            product_title: self.product_title,
            product_subtitle: self.product_subtitle,
            product_content: self.product_content,
            company_image: self.company_image,
            company_image_caption: self.company_image_caption,
            company_title: self.company_title,
            company_subtitle: self.company_subtitle,
            company_content: self.company_content,
            product_points,
            company_points,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<AmazonEntity> for AmazonSummary {
    fn from(entity: AmazonEntity) -> Self {
        Self {
            id: entity.id,
            design_id: entity.design_id,
            product_title: entity.product_title,
            company_title: entity.company_title,
            updated_at: entity.updated_at,
        }
    }
}

/// Which bulletpoint table a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Product,
    Company,
}

impl PointKind {
    pub fn table(&self) -> &'static str {
        match self {
            PointKind::Product => "product_point",
            PointKind::Company => "company_point",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> AmazonEntity {
        let now = Utc::now();
        AmazonEntity {
            id: 7,
            design_id: "2".to_string(),
            product_image: Some("/media/uploads/a.png".to_string()),
            product_image_caption: String::new(),
            product_title: "Widget".to_string(),
            product_subtitle: String::new(),
            product_content: String::new(),
            company_image: None,
            company_image_caption: String::new(),
            company_title: "ACME".to_string(),
            company_subtitle: String::new(),
            company_content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_into_domain_keeps_points() {
        let amazon = entity().into_domain(vec!["Fast".into()], vec!["Family owned".into()]);
        assert_eq!(amazon.id, 7);
        assert_eq!(amazon.product_title, "Widget");
        assert_eq!(amazon.product_points, vec!["Fast"]);
        assert_eq!(amazon.company_points, vec!["Family owned"]);
    }

    #[test]
    fn test_summary_from_entity() {
        let summary = AmazonSummary::from(entity());
        assert_eq!(summary.id, 7);
        assert_eq!(summary.design_id, "2");
        assert_eq!(summary.company_title, "ACME");
    }

    #[test]
    fn test_point_tables() {
        assert_eq!(PointKind::Product.table(), "product_point");
        assert_eq!(PointKind::Company.table(), "company_point");
    }
}
