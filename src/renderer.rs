//! Placeholder substitution for template filenames and contents.
use crate::error::Result;
use indexmap::IndexMap;
use regex::{NoExpand, Regex};

/// Variable values keyed by variable name. `name` always comes first.
pub type Values = IndexMap<String, String>;

/// Trait for template rendering engines.
pub trait TemplateRenderer: Send + Sync {
    /// Renders a template string with the given values.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `values` - Values for variable interpolation
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, values: &Values) -> Result<String>;
}

/// Literal `{{ key }}` substitution.
///
/// Keys are applied in map order; a placeholder whose key has no value is
/// left exactly as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }

    fn pattern(key: &str) -> Result<Regex> {
        Ok(Regex::new(&format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(key)))?)
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// # Errors
    /// * `Error::RenderError` if a key is too large to compile into a pattern
    fn render(&self, template: &str, values: &Values) -> Result<String> {
        let mut result = template.to_string();
        for (key, value) in values {
            let pattern = Self::pattern(key)?;
            result = pattern.replace_all(&result, NoExpand(value)).into_owned();
        }
        Ok(result)
    }
}
