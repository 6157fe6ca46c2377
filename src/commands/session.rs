//! `stagebook session`: interactive answering on stdin/stdout.

use anyhow::Result;
use colored::Colorize;
use std::io;

use super::common::{print_rejection, Workspace};
use crate::session::{
    reduce, run_session, Action, AppState, Outcome, SessionContext, SessionSettings,
};

pub fn execute(workspace: &Workspace, stage: Option<String>) -> Result<()> {
    let document = workspace.open_document()?;
    let mut state = AppState::new(document, SessionSettings::from(&workspace.config));

    if let Some(name) = stage {
        let (next, outcome) = reduce(state, Action::Select(name));
        state = next;
        if let Outcome::Rejected(rejection) = outcome {
            print_rejection(&rejection);
        }
    }

    let context = SessionContext {
        document_path: workspace.document_path(),
        export_dir: &workspace.config.export_dir,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let state = run_session(state, context, stdin.lock(), &mut stdout)?;

    if !state.session.ledger.is_empty() {
        println!(
            "{}",
            "Session ended; answers are not kept between sessions.".dimmed()
        );
    }

    Ok(())
}
