//! Page routes: index, design form and preview.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use domain::models::{Amazon, AmazonSummary, Design};
use persistence::repositories::AmazonRepository;
use tracing::{debug, warn};

use super::redirect::found;
use crate::app::AppState;
use crate::error::ApiError;

/// List every saved page.
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let repo = AmazonRepository::new(state.pool.clone());
    let amazons: Vec<AmazonSummary> = repo
        .list_all()
        .await?
        .into_iter()
        .map(AmazonSummary::from)
        .collect();

    Ok(Html(state.templates.render_index(&amazons)?))
}

/// Blank form for the default design.
///
/// GET /design
pub async fn design_default(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_design(&state, Design::default(), None).await
}

/// Blank form for a design. Design 0 means the default design.
///
/// GET /design/:design_id
pub async fn design(
    State(state): State<AppState>,
    Path(design_id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    render_design(&state, resolve_design(design_id)?, None).await
}

/// Form for a design, prefilled from a saved page.
///
/// GET /design/:design_id/:amazon_id
///
/// Amazon id 0 renders a blank form.
pub async fn design_with_page(
    State(state): State<AppState>,
    Path((design_id, amazon_id)): Path<(i64, i64)>,
) -> Result<Html<String>, ApiError> {
    let amazon_id = (amazon_id != 0).then_some(amazon_id);
    render_design(&state, resolve_design(design_id)?, amazon_id).await
}

/// GET /preview
pub async fn preview_redirect() -> Response {
    found("/design")
}

/// Render a saved page with the design it was saved with.
///
/// GET /preview/:amazon_id
///
/// Amazon id 0 redirects like `/preview`.
pub async fn preview(
    State(state): State<AppState>,
    Path(amazon_id): Path<i64>,
) -> Result<Response, ApiError> {
    if amazon_id == 0 {
        return Ok(preview_redirect().await);
    }

    let amazon = load_page(&state, amazon_id).await?;

    let Some(design) = amazon.design() else {
        warn!(amazon_id, design_id = %amazon.design_id, "Saved page has unknown design");
        return Err(ApiError::NotFound(format!(
            "Design {} not found",
            amazon.design_id
        )));
    };

    Ok(Html(state.templates.render_preview(design, &amazon)?).into_response())
}

fn resolve_design(design_id: i64) -> Result<Design, ApiError> {
    if design_id == 0 {
        return Ok(Design::default());
    }

    Design::from_id(design_id)
        .ok_or_else(|| ApiError::NotFound(format!("Design {} not found", design_id)))
}

async fn load_page(state: &AppState, amazon_id: i64) -> Result<Amazon, ApiError> {
    let repo = AmazonRepository::new(state.pool.clone());
    repo.find_page(amazon_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Amazon page {} not found", amazon_id)))
}

async fn render_design(
    state: &AppState,
    design: Design,
    amazon_id: Option<i64>,
) -> Result<Html<String>, ApiError> {
    let amazon = match amazon_id {
        Some(id) => Some(load_page(state, id).await?),
        None => None,
    };

    debug!(design_id = design.id(), amazon_id, "Rendering design form");
    Ok(Html(state.templates.render_design(design, amazon.as_ref())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_design() {
        assert_eq!(resolve_design(2).unwrap(), Design::Two);
    }

    #[test]
    fn test_resolve_zero_is_default_design() {
        assert_eq!(resolve_design(0).unwrap(), Design::One);
    }

    #[test]
    fn test_resolve_unknown_design() {
        for id in [4, -1, 99] {
            assert!(matches!(resolve_design(id), Err(ApiError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_preview_redirect() {
        let response = preview_redirect().await;
        assert_eq!(response.status(), axum::http::StatusCode::FOUND);
        assert_eq!(response.headers()[axum::http::header::LOCATION], "/design");
    }
}
