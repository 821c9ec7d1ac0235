use crate::error::{Error, Result};
use crate::filesystem::FileSystem;
use crate::loader::interface::TemplateLoader;
use crate::template::FetchedTemplate;
use std::path::Path;

/// Loader for template files on the local filesystem.
pub struct LocalLoader<'a, P: AsRef<Path>> {
    fs: &'a dyn FileSystem,
    path: P,
}

impl<'a, P: AsRef<Path>> LocalLoader<'a, P> {
    /// Creates a new LocalLoader instance.
    pub fn new(fs: &'a dyn FileSystem, path: P) -> Self {
        Self { fs, path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<'_, P> {
    /// Reads the whole template file as UTF-8.
    ///
    /// # Errors
    /// * `Error::ReadTemplateError` if the file is missing or unreadable
    fn load(&self) -> Result<FetchedTemplate> {
        let path = self.path.as_ref();
        self.fs
            .read_to_string(path)
            .map(FetchedTemplate::new)
            .map_err(|source| Error::ReadTemplateError {
                path: path.display().to_string(),
                source,
            })
    }
}
