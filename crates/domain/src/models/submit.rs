//! The submit command: everything a form post asks to be saved.

use shared::validation::{validate_bulletpoints, validate_record_id, validate_text};
use thiserror::Error;
use validator::Validate;

use super::design::Design;

/// Errors raised while turning raw form input into a [`SubmitPage`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Invalid design id: {0}")]
    UnknownDesign(String),

    #[error("Invalid amazon id: {0}")]
    InvalidAmazonId(String),
}

/// A validated request to create or update one preview page.
///
/// Text fields are stored as given; absent fields arrive as empty strings
/// and overwrite whatever was saved before. Image paths are only set when a
/// new upload was accepted.
#[derive(Debug, Clone, Default, Validate)]
pub struct SubmitPage {
    /// Existing record to update; `None` creates a new record.
    pub amazon_id: Option<i64>,
    pub design: Design,

    pub product_image: Option<String>,
    #[validate(
        length(max = 80, message = "Product image caption must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub product_image_caption: String,
    #[validate(
        length(max = 80, message = "Product title must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub product_title: String,
    #[validate(
        length(max = 80, message = "Product subtitle must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub product_subtitle: String,
    #[validate(
        length(max = 80, message = "Product content must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub product_content: String,
    #[validate(custom(function = "validate_bulletpoints"))]
    pub product_bulletpoints: Vec<String>,

    pub company_image: Option<String>,
    #[validate(
        length(max = 80, message = "Company image caption must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub company_image_caption: String,
    #[validate(
        length(max = 80, message = "Company title must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub company_title: String,
    #[validate(
        length(max = 80, message = "Company subtitle must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub company_subtitle: String,
    #[validate(
        length(max = 80, message = "Company content must be at most 80 characters"),
        custom(function = "validate_text")
    )]
    pub company_content: String,
    #[validate(custom(function = "validate_bulletpoints"))]
    pub company_bulletpoints: Vec<String>,
}

impl SubmitPage {
    /// Starts a command from the two identifying form fields.
    ///
    /// `amazon_id` may be absent or blank (create); otherwise it must be a
    /// positive integer.
    pub fn new(design_id: Option<&str>, amazon_id: Option<&str>) -> Result<Self, SubmitError> {
        let raw_design = design_id.unwrap_or_default();
        let design = raw_design
            .parse::<Design>()
            .map_err(|_| SubmitError::UnknownDesign(raw_design.to_string()))?;

        Ok(Self {
            amazon_id: parse_amazon_id(amazon_id)?,
            design,
            ..Default::default()
        })
    }

    /// Product bulletpoints that will be persisted, in submission order.
    pub fn product_points(&self) -> Vec<&str> {
        non_empty(&self.product_bulletpoints)
    }

    /// Company bulletpoints that will be persisted, in submission order.
    pub fn company_points(&self) -> Vec<&str> {
        non_empty(&self.company_bulletpoints)
    }
}

fn parse_amazon_id(raw: Option<&str>) -> Result<Option<i64>, SubmitError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    let id = raw
        .parse::<i64>()
        .map_err(|_| SubmitError::InvalidAmazonId(raw.to_string()))?;
    validate_record_id(id).map_err(|_| SubmitError::InvalidAmazonId(raw.to_string()))?;
    Ok(Some(id))
}

fn non_empty(points: &[String]) -> Vec<&str> {
    points
        .iter()
        .map(String::as_str)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_amazon_id() {
        let page = SubmitPage::new(Some("2"), None).unwrap();
        assert_eq!(page.design, Design::Two);
        assert_eq!(page.amazon_id, None);
    }

    #[test]
    fn test_new_blank_amazon_id_creates() {
        let page = SubmitPage::new(Some("1"), Some("  ")).unwrap();
        assert_eq!(page.amazon_id, None);
    }

    #[test]
    fn test_new_with_amazon_id() {
        let page = SubmitPage::new(Some("3"), Some("17")).unwrap();
        assert_eq!(page.amazon_id, Some(17));
    }

    #[test]
    fn test_new_rejects_unknown_design() {
        assert_eq!(
            SubmitPage::new(Some("12"), None).unwrap_err(),
            SubmitError::UnknownDesign("12".to_string())
        );
        assert_eq!(
            SubmitPage::new(None, None).unwrap_err(),
            SubmitError::UnknownDesign(String::new())
        );
    }

    #[test]
    fn test_new_rejects_bad_amazon_id() {
        assert_eq!(
            SubmitPage::new(Some("1"), Some("abc")).unwrap_err(),
            SubmitError::InvalidAmazonId("abc".to_string())
        );
        assert_eq!(
            SubmitPage::new(Some("1"), Some("0")).unwrap_err(),
            SubmitError::InvalidAmazonId("0".to_string())
        );
    }

    #[test]
    fn test_empty_bulletpoints_dropped_in_order() {
        let page = SubmitPage {
            product_bulletpoints: vec!["A".to_string(), String::new(), "B".to_string()],
            company_bulletpoints: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(page.product_points(), vec!["A", "B"]);
        assert!(page.company_points().is_empty());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(SubmitPage::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_title() {
        let page = SubmitPage {
            product_title: "x".repeat(81),
            ..Default::default()
        };
        let errors = page.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("product_title"));
    }

    #[test]
    fn test_validate_rejects_long_bulletpoint() {
        let page = SubmitPage {
            company_bulletpoints: vec!["y".repeat(81)],
            ..Default::default()
        };
        let errors = page.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company_bulletpoints"));
    }

    #[test]
    fn test_validate_rejects_nul_characters() {
        let page = SubmitPage {
            product_title: "a\0b".to_string(),
            company_image_caption: "\0".to_string(),
            product_bulletpoints: vec!["ok".to_string(), "x\0".to_string()],
            ..Default::default()
        };
        let errors = page.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("product_title"));
        assert!(fields.contains_key("company_image_caption"));
        assert!(fields.contains_key("product_bulletpoints"));
        assert!(!fields.contains_key("company_title"));
    }
}
