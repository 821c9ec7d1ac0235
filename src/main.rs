//! boil's application entry point.
//! Parses the command line, wires the real capabilities together and runs
//! the generation pipeline.

use boil::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    filesystem::LocalFileSystem,
    generate::generate,
    loader::http::ReqwestClient,
    logger::init_logger,
    prompt::{AnswersPrompter, DialoguerPrompter, Prompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let http = ReqwestClient::new()?;
    let fs = LocalFileSystem::new();
    let prompt: Box<dyn Prompter> = if args.stdin {
        Box::new(AnswersPrompter::from_stdin()?)
    } else {
        Box::new(DialoguerPrompter::new())
    };

    generate(&args.project_name, &args.template, &http, &fs, &*prompt)?;
    Ok(())
}
