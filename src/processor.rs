//! Writes a parsed template to a new project directory.

use crate::error::{Error, Result};
use crate::filesystem::FileSystem;
use crate::renderer::{TemplateRenderer, Values};
use crate::template::{Template, TemplateFile};
use log::{debug, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Materializes templates with a fixed set of values.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    fs: &'a dyn FileSystem,
    answers: &'a Values,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        fs: &'a dyn FileSystem,
        answers: &'a Values,
    ) -> Self {
        Self {
            engine,
            fs,
            answers,
        }
    }

    /// Creates `root` and writes every template file beneath it.
    ///
    /// `root` must not exist yet. Files are written in parallel; when several
    /// fail, the error of the first failing file in template order is
    /// returned. Files written before a failure are left on disk.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The absolute project directory
    ///
    /// # Errors
    /// * `Error::OutputDirectoryExistsError` if `root` already exists
    /// * `Error::CreateDirError` if a directory cannot be created
    /// * `Error::WriteFileError` if a file cannot be written
    pub fn create_files<P: AsRef<Path>>(&self, root: P, template: &Template) -> Result<PathBuf> {
        let root = std::path::absolute(root.as_ref())?;

        if self.fs.exists(&root) {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: root.display().to_string(),
            });
        }

        info!("Creating project directory: {}", root.display());
        self.fs.create_dir_all(&root).map_err(|source| Error::CreateDirError {
            path: root.display().to_string(),
            source,
        })?;

        let results: Vec<Result<()>> = template
            .files
            .par_iter()
            .map(|file| self.create_file(&root, file))
            .collect();
        results.into_iter().collect::<Result<()>>()?;

        info!("Project '{}' created successfully!", root.display());
        info!("Generated {} files", template.files.len());
        Ok(root)
    }

    fn create_file(&self, root: &Path, file: &TemplateFile) -> Result<()> {
        let filename = self.engine.render(&file.filename, self.answers)?;
        let content = self.engine.render(&file.content, self.answers)?;

        info!("Creating file: {filename}");

        // a leading separator must not escape the project root
        let target = root.join(filename.trim_start_matches(['/', '\\']));

        if let Some(parent) = target.parent() {
            if !self.fs.exists(parent) {
                debug!("Creating directory: {}", parent.display());
                self.fs.create_dir_all(parent).map_err(|source| Error::CreateDirError {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        self.fs
            .write(&target, strip_trailing_newline(&content))
            .map_err(|source| Error::WriteFileError {
                path: target.display().to_string(),
                source,
            })
    }
}

/// Removes exactly one trailing `'\n'`, the one the parser appends after the
/// last line of every file.
pub fn strip_trailing_newline(content: &str) -> &str {
    content.strip_suffix('\n').unwrap_or(content)
}
