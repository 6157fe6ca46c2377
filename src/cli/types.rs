use clap::{Parser, Subcommand};
use stagebook::validation::clap_stage_name_validator;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "stagebook")]
#[command(about = "Collect answers to life-stage questions and export them as JSONL", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Stage document to use (overrides config and STAGEBOOK_DOCUMENT)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Config file (default: ./stagebook.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty stage document
    Init {
        /// Replace an existing document
        #[arg(long)]
        force: bool,
    },

    /// List stages with status and question counts
    Stages,

    /// Manage individual stages
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },

    /// Manage questions
    Question {
        #[command(subcommand)]
        command: QuestionCommands,
    },

    /// Start an interactive answering session
    Session {
        /// Stage to select on start
        #[arg(short, long, value_parser = clap_stage_name_validator)]
        stage: Option<String>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// Append a new stage in the building state
    Create {
        /// Stage name
        #[arg(value_parser = clap_stage_name_validator)]
        name: String,
    },

    /// Show one page of a stage's questions
    Show {
        /// Stage name
        name: String,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Freeze a stage's question set so it can be answered
    Commit {
        /// Stage name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum QuestionCommands {
    /// Append a question to a building stage
    Add {
        /// Stage name
        stage: String,

        /// Question text
        text: String,
    },
}
