use crate::error::Result;
use crate::template::FetchedTemplate;

/// Trait for loading raw template text from different sources.
pub trait TemplateLoader {
    /// Loads the template text.
    ///
    /// # Returns
    /// * `Result<FetchedTemplate>` - The unparsed template
    fn load(&self) -> Result<FetchedTemplate>;
}
