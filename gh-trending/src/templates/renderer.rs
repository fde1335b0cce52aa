//! Template renderer.

use super::{
    TemplateError, ACTIVE_TEMPLATE, DETAILS_TEMPLATE, INACTIVE_TEMPLATE, LABEL_TEMPLATE,
    SELECTED_TEMPLATE,
};
use crate::repository::Repository;
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use serde_json::Value;

const LABEL: &str = "label";
const ACTIVE: &str = "active";
const INACTIVE: &str = "inactive";
const SELECTED: &str = "selected";
const DETAILS: &str = "details";

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for terminal output)
/// - Strict mode (catches missing variables)
/// - `faint` helper that dims its argument with ANSI codes
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Descriptions routinely contain '<' and '&'
    hbs.register_escape_fn(no_escape);

    hbs.set_strict_mode(true);

    hbs.register_helper("faint", Box::new(faint_helper));

    hbs
}

/// Wraps the first parameter in the ANSI "faint" attribute.
///
/// Usage: `{{faint "Label:"}}`
fn faint_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write("\u{1b}[2m")?;
    out.write(text)?;
    out.write("\u{1b}[0m")?;
    Ok(())
}

/// Renders the selector's label, list lines and details block.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RegistrationError`] if a template does not
    /// compile.
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_templates(
            LABEL_TEMPLATE,
            ACTIVE_TEMPLATE,
            INACTIVE_TEMPLATE,
            SELECTED_TEMPLATE,
            DETAILS_TEMPLATE,
        )
    }

    /// Creates a renderer with custom templates.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RegistrationError`] if a template does not
    /// compile.
    pub fn with_templates(
        label: &str,
        active: &str,
        inactive: &str,
        selected: &str,
        details: &str,
    ) -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(LABEL, label)?;
        handlebars.register_template_string(ACTIVE, active)?;
        handlebars.register_template_string(INACTIVE, inactive)?;
        handlebars.register_template_string(SELECTED, selected)?;
        handlebars.register_template_string(DETAILS, details)?;
        Ok(Self { handlebars })
    }

    /// Renders the list label.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_label(&self) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(LABEL, &Value::Null)?)
    }

    /// Renders the line for the highlighted repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_active(&self, repository: &Repository) -> Result<String, TemplateError> {
        self.render_repository(ACTIVE, repository)
    }

    /// Renders the line for a repository that is not highlighted.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_inactive(&self, repository: &Repository) -> Result<String, TemplateError> {
        self.render_repository(INACTIVE, repository)
    }

    /// Renders the confirmation line for a chosen repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_selected(&self, repository: &Repository) -> Result<String, TemplateError> {
        self.render_repository(SELECTED, repository)
    }

    /// Renders the details block for a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_details(&self, repository: &Repository) -> Result<String, TemplateError> {
        self.render_repository(DETAILS, repository)
    }

    fn render_repository(
        &self,
        name: &str,
        repository: &Repository,
    ) -> Result<String, TemplateError> {
        let data = serde_json::to_value(repository)?;
        Ok(self.handlebars.render(name, &data)?)
    }
}
