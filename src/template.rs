//! The `.hsfiles` template format.
//!
//! A template is a single text blob in which every file is introduced by a
//! marker line:
//!
//! ```text
//! {-# START_FILE src/{{name}}.rs #-}
//! fn main() {}
//! ```
//!
//! Text before the first marker is ignored. Filenames and contents may
//! reference `{{variable}}` placeholders.

use indexmap::IndexSet;
use log::info;
use regex::Regex;
use std::sync::LazyLock;

static START_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{-#\s*START_FILE\s+(.+?)\s*#-\}$")
        .expect("START_FILE pattern is valid")
});

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^}]+)\}\}")
        .expect("placeholder pattern is valid")
});

/// Raw template text, as returned by a loader and not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTemplate(String);

impl FetchedTemplate {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One file of a template, before variable substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub filename: String,
    /// Every line carries its own trailing newline, the last one included.
    pub content: String,
}

impl TemplateFile {
    pub fn new<F: Into<String>, C: Into<String>>(filename: F, content: C) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// A parsed template: files in marker order and the distinct variable names
/// they reference, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub files: Vec<TemplateFile>,
    pub variables: IndexSet<String>,
}

enum ParseState {
    NoFileOpen,
    FileOpen(TemplateFile),
}

impl ParseState {
    /// Closes the open file, if any, into `files`.
    fn close(self, files: &mut Vec<TemplateFile>) {
        if let ParseState::FileOpen(file) = self {
            if !file.filename.is_empty() {
                files.push(file);
            }
        }
    }
}

/// Returns the trimmed names of every `{{...}}` placeholder in `text`.
pub fn extract_variables(text: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Parses raw template text into files and variables.
///
/// Parsing never fails: input without any marker yields an empty template.
pub fn parse_template(raw: &FetchedTemplate) -> Template {
    info!("Parsing template...");

    let mut files = Vec::new();
    let mut state = ParseState::NoFileOpen;

    for line in raw.as_str().split('\n') {
        if let Some(caps) = START_FILE.captures(line) {
            let filename = caps.get(1).map_or("", |m| m.as_str()).trim();
            state.close(&mut files);
            state = ParseState::FileOpen(TemplateFile::new(filename, ""));
        } else if let ParseState::FileOpen(file) = &mut state {
            file.content.push_str(line);
            file.content.push('\n');
        }
    }
    state.close(&mut files);

    let variables: IndexSet<String> = files
        .iter()
        .flat_map(|file| {
            extract_variables(&file.filename)
                .chain(extract_variables(&file.content))
        })
        .map(str::to_string)
        .collect();

    info!(
        "Found {} files and {} variables",
        files.len(),
        variables.len()
    );

    Template { files, variables }
}
