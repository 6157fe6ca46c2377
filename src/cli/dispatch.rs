use anyhow::Result;
use clap::CommandFactory;
use stagebook::commands::common::Workspace;
use stagebook::commands::{init, question, session, stage, stages};
use stagebook::completions::{generate_completions, Shell};
use std::io;
use std::str::FromStr;

use super::types::{Cli, Commands, QuestionCommands, StageCommands};

pub fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let shell = Shell::from_str(shell)?;
        let mut cmd = Cli::command();
        generate_completions(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let workspace = Workspace::resolve(cli.config.as_deref(), cli.document)?;

    match cli.command {
        Commands::Init { force } => init::execute(&workspace, force),
        Commands::Stages => stages::list(&workspace),
        Commands::Stage { command } => match command {
            StageCommands::Create { name } => stage::create(&workspace, name),
            StageCommands::Show { name, page } => stage::show(&workspace, name, page),
            StageCommands::Commit { name } => stage::commit(&workspace, name),
        },
        Commands::Question { command } => match command {
            QuestionCommands::Add { stage, text } => question::add(&workspace, stage, text),
        },
        Commands::Session { stage } => session::execute(&workspace, stage),
        Commands::Completions { .. } => Ok(()),
    }
}
