//! Command-line interface implementation for boil.
//! Provides argument parsing and the usage text shown on malformed invocations.

use clap::{error::ErrorKind, Parser};

/// Printed when the project name or the template is missing.
pub const USAGE: &str = "Usage: boil <project-name> <template-path>

Examples:
  boil my-project ./templates/basic
  boil my-app https://raw.githubusercontent.com/user/repo/main/template.hsfiles
  boil my-project ./template.hsfiles --verbose";

/// Command-line arguments structure for boil.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project; also the directory created for it
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Path or HTTP(S) URL of the .hsfiles template
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read variable values as a JSON object from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Anything after the template; accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 after printing [`USAGE`] if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                println!("{USAGE}");
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
