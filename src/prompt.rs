//! User interaction for boil.
//! Variable values come either from an interactive terminal prompt or from a
//! JSON object piped through stdin.

use crate::error::Result;
use dialoguer::Input;
use indexmap::IndexMap;
use std::io::{self, Read, Write};

/// The interactive channel used by the resolver.
pub trait Prompter {
    /// Writes status text for the user, without a prompt.
    fn write(&self, text: &str);

    /// Asks for the value of `variable`, displayed as `<variable>: `.
    /// Returns the raw, untrimmed answer.
    fn ask(&self, variable: &str) -> io::Result<String>;
}

fn write_stdout(text: &str) {
    print!("{text}");
    io::stdout().flush().ok();
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn write(&self, text: &str) {
        write_stdout(text);
    }

    fn ask(&self, variable: &str) -> io::Result<String> {
        // the default theme renders the prompt as "<variable>: "
        Input::<String>::new()
            .with_prompt(variable)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

/// Prompter answering from a JSON object instead of the terminal.
///
/// String values are used as they are; any other JSON value is used by its
/// JSON text, so `{"port": 8080}` answers `port` with `8080`.
#[derive(Debug, Default)]
pub struct AnswersPrompter {
    answers: IndexMap<String, serde_json::Value>,
}

impl AnswersPrompter {
    pub fn new(answers: IndexMap<String, serde_json::Value>) -> Self {
        Self { answers }
    }

    /// Reads a JSON object from `reader`. Empty input means no answers.
    ///
    /// # Errors
    /// * `Error::IoError` if reading fails
    /// * `Error::AnswersError` if the input is not a JSON object
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        if buffer.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::new(serde_json::from_str(&buffer)?))
    }

    pub fn from_stdin() -> Result<Self> {
        Self::from_reader(io::stdin().lock())
    }
}

impl Prompter for AnswersPrompter {
    fn write(&self, text: &str) {
        write_stdout(text);
    }

    fn ask(&self, variable: &str) -> io::Result<String> {
        match self.answers.get(variable) {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(value) => Ok(value.to_string()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no answer provided for '{variable}'"),
            )),
        }
    }
}
