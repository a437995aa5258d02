//! Page template rendering.
//!
//! Templates live in `crates/api/templates/` and are embedded into the
//! binary. Every [`Design`] must have both a form and a preview template;
//! this is checked once when the renderer is built.

use domain::models::{Amazon, AmazonSummary, Design};
use minijinja::{context, Environment};
use rust_embed::Embed;
use thiserror::Error;

/// Template rendering the list of saved pages.
pub const INDEX_TEMPLATE: &str = "index.html";

#[derive(Embed)]
#[folder = "templates/"]
struct TemplateAssets;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template {0} is missing")]
    Missing(String),

    #[error("Template {0} is not valid UTF-8")]
    Encoding(String),

    #[error(transparent)]
    Render(#[from] minijinja::Error),
}

/// Renders the index, form and preview pages.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Loads the embedded templates and checks every design is covered.
    pub fn new() -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for name in TemplateAssets::iter() {
            let Some(file) = TemplateAssets::get(&name) else {
                return Err(TemplateError::Missing(name.into_owned()));
            };
            let source = String::from_utf8(file.data.into_owned())
                .map_err(|_| TemplateError::Encoding(name.to_string()))?;
            env.add_template_owned(name.into_owned(), source)?;
        }

        let renderer = Self { env };
        renderer.check_complete()?;
        Ok(renderer)
    }

    fn check_complete(&self) -> Result<(), TemplateError> {
        let required = Design::ALL
            .iter()
            .flat_map(|d| [d.form_template(), d.preview_template()])
            .chain(std::iter::once(INDEX_TEMPLATE.to_string()));

        for name in required {
            if self.env.get_template(&name).is_err() {
                return Err(TemplateError::Missing(name));
            }
        }
        Ok(())
    }

    pub fn render_index(&self, amazons: &[AmazonSummary]) -> Result<String, TemplateError> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(context! { amazons => amazons })?)
    }

    /// Renders the form for `design`, prefilled when `amazon` is given.
    pub fn render_design(&self, design: Design, amazon: Option<&Amazon>) -> Result<String, TemplateError> {
        let template = self.env.get_template(&design.form_template())?;
        Ok(template.render(context! {
            preview => true,
            design_id => design.id(),
            designs => Design::ALL.iter().map(Design::id).collect::<Vec<_>>(),
            amazon => amazon,
        })?)
    }

    /// Renders the finished page for a saved record.
    pub fn render_preview(&self, design: Design, amazon: &Amazon) -> Result<String, TemplateError> {
        let template = self.env.get_template(&design.preview_template())?;
        Ok(template.render(context! {
            design => true,
            design_id => design.id(),
            amazon => amazon,
        })?)
    }
}
