//! Home command - top projects

use crate::{
    api::{PagedResult, Project, SearchBackend},
    output,
    search::ProjectQuery,
    ui::OutputWriter,
    DevfinderError,
};

type Result<T> = std::result::Result<T, DevfinderError>;

/// Fetch the most popular projects
///
/// # Errors
/// Returns an error if the backend request fails.
pub fn top_projects<B: SearchBackend + ?Sized>(backend: &B, count: u32) -> Result<PagedResult<Project>> {
    let query = ProjectQuery::top_projects(count);
    tracing::debug!(?query, "Fetching top projects");
    Ok(backend.search_projects(&query)?)
}

/// Execute the home command
///
/// # Errors
/// Returns an error if the fetch fails or JSON output cannot be produced.
pub fn execute<B: SearchBackend + ?Sized>(
    backend: &B,
    count: u32,
    json: bool,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let projects = top_projects(backend, count)?;

    if json {
        out.write(&serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        if !quiet {
            out.info("No projects found.");
        }
        return Ok(());
    }

    if !quiet {
        out.info("Top projects");
    }
    for project in &projects.hits {
        out.write(&output::project_card(project, quiet));
    }
    Ok(())
}
