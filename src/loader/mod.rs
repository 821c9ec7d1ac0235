//! Template fetching for boil.
//! A template source is either an HTTP(S) URL or a path to a local file;
//! both resolve to the raw, unparsed template text.

use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::loader::http::{HttpClient, HttpLoader};
use crate::loader::interface::TemplateLoader;
use crate::loader::local::LocalLoader;
use crate::template::FetchedTemplate;
use log::info;
use std::path::PathBuf;

pub mod http;
pub mod interface;
pub mod local;

/// Represents the source location of a template.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// HTTP or HTTPS URL
    Url(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Url(url) => write!(f, "URL: '{url}'"),
        }
    }
}

impl TemplateSource {
    /// Classifies a template argument. Only the `http://` and `https://`
    /// prefixes select the URL source; everything else is a local path.
    pub fn from_string(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::FileSystem(PathBuf::from(s))
        }
    }
}

/// Returns the raw template text from the provided template source.
///
/// # Arguments
/// * `template` - Path or URL given on the command line
/// * `http` - Client used for URL sources
/// * `fs` - Filesystem used for local sources
pub fn fetch_template(
    template: &str,
    http: &dyn HttpClient,
    fs: &dyn FileSystem,
) -> Result<FetchedTemplate> {
    let source = TemplateSource::from_string(template);
    info!("Fetching template from: {source}");

    let loader: Box<dyn TemplateLoader + '_> = match source {
        TemplateSource::Url(url) => Box::new(HttpLoader::new(http, url)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(fs, path)),
    };

    loader.load()
}
