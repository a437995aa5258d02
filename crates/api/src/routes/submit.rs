//! Page editor form submission.

use axum::{extract::State, response::Response};
use persistence::repositories::AmazonRepository;
use tracing::info;
use validator::Validate;

use super::redirect::found;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SubmitForm;
use crate::middleware::metrics::record_page_saved;

/// Create or update a page, then show it.
///
/// POST /submit
///
/// Images are written before the transaction starts, so a rejected submit
/// can still leave a stored upload behind.
pub async fn submit(State(state): State<AppState>, form: SubmitForm) -> Result<Response, ApiError> {
    let mut page = form.to_page()?;
    page.validate()?;

    page.product_image = state.uploads.store(form.product_image.as_ref()).await?;
    page.company_image = state.uploads.store(form.company_image.as_ref()).await?;

    let repo = AmazonRepository::new(state.pool.clone());
    let Some(saved) = repo.save_page(&page).await? else {
        let id = page.amazon_id.unwrap_or_default();
        return Err(ApiError::NotFound(format!("Amazon page {} not found", id)));
    };

    let created = page.amazon_id.is_none();
    record_page_saved(created);
    info!(
        amazon_id = saved.id,
        design_id = page.design.id(),
        created,
        product_points = page.product_points().len(),
        company_points = page.company_points().len(),
        "Amazon page saved"
    );

    Ok(found(format!("/preview/{}", saved.id)))
}
