//! Multipart extractor for the page editor form.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use domain::models::{SubmitError, SubmitPage};

use crate::error::ApiError;
use crate::services::UploadedFile;

/// Raw fields of a `POST /submit` body.
///
/// Scalar fields keep the first value sent under their name; bulletpoint
/// fields collect every value in order. File fields without a filename
/// count as absent. Unknown fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    pub design_id: Option<String>,
    pub amazon_id: Option<String>,

    pub product_image: Option<UploadedFile>,
    pub product_image_caption: Option<String>,
    pub product_title: Option<String>,
    pub product_subtitle: Option<String>,
    pub product_content: Option<String>,
    pub product_bulletpoints: Vec<String>,

    pub company_image: Option<UploadedFile>,
    pub company_image_caption: Option<String>,
    pub company_title: Option<String>,
    pub company_subtitle: Option<String>,
    pub company_content: Option<String>,
    pub company_bulletpoints: Vec<String>,
}

impl SubmitForm {
    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "design-id" => &mut self.design_id,
            "amazon-id" => &mut self.amazon_id,
            "product-image-caption" => &mut self.product_image_caption,
            "product-title" => &mut self.product_title,
            "product-subtitle" => &mut self.product_subtitle,
            "product-content" => &mut self.product_content,
            "company-image-caption" => &mut self.company_image_caption,
            "company-title" => &mut self.company_title,
            "company-subtitle" => &mut self.company_subtitle,
            "company-content" => &mut self.company_content,
            "product-bulletpoints" => return self.product_bulletpoints.push(value),
            "company-bulletpoints" => return self.company_bulletpoints.push(value),
            _ => return,
        };

        if slot.is_none() {
            *slot = Some(value);
        }
    }

    /// Builds the submit command; image paths are filled in after upload.
    pub fn to_page(&self) -> Result<SubmitPage, SubmitError> {
        let mut page = SubmitPage::new(self.design_id.as_deref(), self.amazon_id.as_deref())?;

        page.product_image_caption = text(&self.product_image_caption);
        page.product_title = text(&self.product_title);
        page.product_subtitle = text(&self.product_subtitle);
        page.product_content = text(&self.product_content);
        page.product_bulletpoints = self.product_bulletpoints.clone();

        page.company_image_caption = text(&self.company_image_caption);
        page.company_title = text(&self.company_title);
        page.company_subtitle = text(&self.company_subtitle);
        page.company_content = text(&self.company_content);
        page.company_bulletpoints = self.company_bulletpoints.clone();

        Ok(page)
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[async_trait]
impl<S> FromRequest<S> for SubmitForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        let mut form = SubmitForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "product-image" | "company-image" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await?;
                    let file = (!filename.is_empty()).then_some(UploadedFile { filename, data });

                    let slot = if name == "product-image" {
                        &mut form.product_image
                    } else {
                        &mut form.company_image
                    };
                    if slot.is_none() {
                        *slot = file;
                    }
                }
                _ => {
                    let value = field.text().await?;
                    form.set_text(&name, value);
                }
            }
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};
    use domain::models::Design;

    const BOUNDARY: &str = "X-PREVIEW-BOUNDARY";

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        )
    }

    fn file_part(name: &str, filename: &str, content: &str) -> String {
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n{}\r\n",
            BOUNDARY, name, filename, content
        )
    }

    async fn extract(parts: &[String]) -> Result<SubmitForm, ApiError> {
        let body = format!("{}--{}--\r\n", parts.concat(), BOUNDARY);
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/submit")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();
        SubmitForm::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_collects_fields() {
        let form = extract(&[
            text_part("design-id", "2"),
            text_part("product-title", "Widget"),
            text_part("product-bulletpoints", "Fast"),
            text_part("product-bulletpoints", ""),
            text_part("product-bulletpoints", "Cheap"),
            text_part("company-title", "ACME"),
            text_part("unrelated", "ignored"),
        ])
        .await
        .unwrap();

        assert_eq!(form.design_id.as_deref(), Some("2"));
        assert_eq!(form.amazon_id, None);
        assert_eq!(form.product_title.as_deref(), Some("Widget"));
        assert_eq!(form.product_bulletpoints, vec!["Fast", "", "Cheap"]);
        assert_eq!(form.company_title.as_deref(), Some("ACME"));
        assert!(form.company_bulletpoints.is_empty());
    }

    #[tokio::test]
    async fn test_first_scalar_value_wins() {
        let form = extract(&[
            text_part("design-id", "1"),
            text_part("product-title", "First"),
            text_part("product-title", "Second"),
        ])
        .await
        .unwrap();

        assert_eq!(form.product_title.as_deref(), Some("First"));
    }

    #[tokio::test]
    async fn test_collects_files() {
        let form = extract(&[
            text_part("design-id", "1"),
            file_part("product-image", "widget.png", "PNGDATA"),
            file_part("company-image", "", ""),
        ])
        .await
        .unwrap();

        let image = form.product_image.expect("product image");
        assert_eq!(image.filename, "widget.png");
        assert_eq!(&image.data[..], b"PNGDATA");
        assert!(form.company_image.is_none());
    }

    #[tokio::test]
    async fn test_rejects_non_multipart_body() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/submit")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let result = SubmitForm::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_to_page_defaults_missing_text_to_empty() {
        let form = SubmitForm {
            design_id: Some("3".to_string()),
            amazon_id: Some("12".to_string()),
            product_title: Some("Widget".to_string()),
            product_bulletpoints: vec!["A".to_string(), String::new(), "B".to_string()],
            ..Default::default()
        };

        let page = form.to_page().unwrap();
        assert_eq!(page.design, Design::Three);
        assert_eq!(page.amazon_id, Some(12));
        assert_eq!(page.product_title, "Widget");
        assert_eq!(page.product_subtitle, "");
        assert_eq!(page.company_content, "");
        assert_eq!(page.product_points(), vec!["A", "B"]);
        assert!(page.product_image.is_none());
    }

    #[test]
    fn test_to_page_rejects_unknown_design() {
        let form = SubmitForm {
            design_id: Some("99".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.to_page().unwrap_err(),
            SubmitError::UnknownDesign("99".to_string())
        );
    }
}
