//! Notelet CLI entry point.

use clap::Parser;
use notelet::cli::args::Cli;
use notelet::cli::menu;
use notelet::cli::output::Output;
use notelet::config::Config;
use notelet::error::Result;
use notelet::launcher::{SystemLauncher, Toolbox};
use notelet::store::NoteStore;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    // CLI flags override the config file.
    if let Some(ref dir) = cli.notes_dir {
        config.notes_dir = dir.clone();
    }
    if let Some(ref editor) = cli.editor {
        config.editor_cmd = editor.clone();
    }
    if let Some(ref selector) = cli.selector {
        config.selector_cmd = selector.clone();
    }

    let output = Output::new(cli.quiet);

    let newly_created = !config.notes_dir.is_dir();
    let store = NoteStore::open(config.notes_dir.as_path())?;
    if newly_created {
        output.status(&format!(
            "Created notes directory: {}",
            store.root().display()
        ));
    }

    let tools = Toolbox::new(SystemLauncher, config.editor_cmd, config.selector_cmd);
    let mut input = io::stdin().lock();

    menu::run(&store, &tools, &mut input, &output)
}
