#![allow(dead_code)]

use boil::error::{Error, Result};
use boil::filesystem::FileSystem;
use boil::loader::http::{HttpClient, HttpResponse};
use boil::prompt::Prompter;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use url::Url;

pub const SINGLE_FILE_TEMPLATE: &str = r#"{-# START_FILE package.json #-}
{
  "name": "{{name}}",
  "version": "1.0.0"
}"#;

pub const MULTIPLE_FILE_TEMPLATE: &str = r#"{-# START_FILE src/{{name}}.ts #-}
export const hello = "{{greeting}}";

{-# START_FILE README.md #-}
# {{name}}

A project by {{author}}."#;

/// HTTP client answering every request with the same canned outcome.
pub struct FakeHttp {
    outcome: std::result::Result<HttpResponse, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeHttp {
    pub fn responding(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// A client that must never be used.
    pub fn unused() -> Self {
        Self::failing("unexpected network access")
    }
}

impl HttpClient for FakeHttp {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        self.requested.borrow_mut().push(url.to_string());
        self.outcome
            .clone()
            .map_err(|reason| Error::NetworkError { reason })
    }
}

#[derive(Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    mkdir_calls: Vec<PathBuf>,
}

/// In-memory filesystem with failure injection.
#[derive(Default)]
pub struct FakeFs {
    state: Mutex<FsState>,
    failing_writes: HashSet<PathBuf>,
    failing_dirs: HashSet<PathBuf>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FsState> {
        self.state.lock().unwrap()
    }

    pub fn with_file<P: Into<PathBuf>>(self, path: P, content: &str) -> Self {
        self.state().files.insert(path.into(), content.to_string());
        self
    }

    pub fn with_dir<P: Into<PathBuf>>(self, path: P) -> Self {
        self.state().dirs.insert(path.into());
        self
    }

    pub fn fail_write<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    pub fn fail_mkdir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.failing_dirs.insert(path.into());
        self
    }

    pub fn file<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        self.state().files.get(path.as_ref()).cloned()
    }

    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.state().files.clone()
    }

    pub fn mkdir_calls(&self) -> Vec<PathBuf> {
        self.state().mkdir_calls.clone()
    }

    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        self.state().dirs.contains(path.as_ref())
    }
}

impl FileSystem for FakeFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory (os error 2)",
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state();
        state.dirs.contains(path) || state.files.contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        state.mkdir_calls.push(path.to_path_buf());
        if self.failing_dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.failing_writes.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let mut state = self.state();
        let parent_exists = path
            .parent()
            .map_or(true, |parent| state.dirs.contains(parent));
        if !parent_exists {
            return Err(io::Error::new(io::ErrorKind::NotFound, "parent directory missing"));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Prompter replaying scripted answers and recording what it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<io::Result<String>>>,
    pub asked: RefCell<Vec<String>>,
    pub written: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I: IntoIterator<Item = &'static str>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().map(|a| Ok(a.to_string())).collect()),
            ..Self::default()
        }
    }

    /// Answers with `answers`, then fails on the next prompt.
    pub fn failing_after<I: IntoIterator<Item = &'static str>>(answers: I) -> Self {
        let prompter = Self::new(answers);
        let closed = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed");
        prompter.answers.borrow_mut().push_back(Err(closed));
        prompter
    }
}

impl Prompter for ScriptedPrompter {
    fn write(&self, text: &str) {
        self.written.borrow_mut().push(text.to_string());
    }

    fn ask(&self, variable: &str) -> io::Result<String> {
        self.asked.borrow_mut().push(variable.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => answer,
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers")),
        }
    }
}
