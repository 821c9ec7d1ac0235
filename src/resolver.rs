//! Collects a value for every variable a template references.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::Values;
use indexmap::IndexSet;
use log::debug;

/// The variable always bound to the project name.
pub const NAME_VARIABLE: &str = "name";

/// Builds the values for `variables`.
///
/// `name` is taken from `project_name`; every other variable is asked for
/// through `prompt`, one at a time in `variables` order, and its answer is
/// trimmed. Nothing is asked or written when `name` is the only variable.
///
/// # Errors
/// * `Error::PromptError` for the first variable whose prompt fails; answers
///   collected before it are discarded
pub fn get_answers(
    prompt: &dyn Prompter,
    variables: &IndexSet<String>,
    project_name: &str,
) -> Result<Values> {
    let mut answers = Values::new();
    answers.insert(NAME_VARIABLE.to_string(), project_name.to_string());

    let to_prompt: Vec<&String> = variables
        .iter()
        .filter(|variable| *variable != NAME_VARIABLE)
        .collect();

    if to_prompt.is_empty() {
        return Ok(answers);
    }

    prompt.write("Please provide values for the following variables:\n");

    for variable in to_prompt {
        let answer = prompt.ask(variable).map_err(|source| Error::PromptError {
            variable: variable.clone(),
            source,
        })?;
        debug!("Answer for '{}' received", variable);
        answers.insert(variable.clone(), answer.trim().to_string());
    }

    Ok(answers)
}
