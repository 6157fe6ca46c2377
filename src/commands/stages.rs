//! `stagebook stages`: list every stage in the document.

use anyhow::Result;

use super::common::Workspace;
use crate::session::view::render_stage_list;

pub fn list(workspace: &Workspace) -> Result<()> {
    let document = workspace.open_document()?;
    print!("{}", render_stage_list(&document, None));
    Ok(())
}
