//! The generation pipeline: fetch, parse, resolve, materialize.

use crate::error::{Error, Result};
use crate::filesystem::FileSystem;
use crate::loader::fetch_template;
use crate::loader::http::HttpClient;
use crate::processor::Processor;
use crate::prompt::Prompter;
use crate::renderer::PlaceholderRenderer;
use crate::resolver::get_answers;
use crate::template::parse_template;
use std::path::PathBuf;

/// Creates the project `project_name` in the current directory from the
/// template found at `template`.
///
/// # Arguments
/// * `project_name` - Project directory and value of the `name` variable
/// * `template` - Local path or HTTP(S) URL of a `.hsfiles` template
/// * `http` - Client used when `template` is a URL
/// * `fs` - Filesystem used to read the template and write the project
/// * `prompt` - Source of the values of the other variables
///
/// # Returns
/// * `Result<PathBuf>` - Absolute path of the created project
///
/// # Errors
/// Any stage error is returned unchanged; a template without files is
/// `Error::EmptyTemplateError`.
pub fn generate(
    project_name: &str,
    template: &str,
    http: &dyn HttpClient,
    fs: &dyn FileSystem,
    prompt: &dyn Prompter,
) -> Result<PathBuf> {
    prompt.write(&format!("Creating project: {project_name}\n"));

    let fetched = fetch_template(template, http, fs)?;
    let template = parse_template(&fetched);
    if template.files.is_empty() {
        return Err(Error::EmptyTemplateError);
    }

    let answers = get_answers(prompt, &template.variables, project_name)?;

    let engine = PlaceholderRenderer::new();
    Processor::new(&engine, fs, &answers)
        .create_files(project_name, &template)
}
