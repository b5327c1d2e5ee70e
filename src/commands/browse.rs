//! Browse command - interactive developer search page

use crate::{
    api::SearchBackend,
    search::{FilterState, SearchSession, SearchWorker},
    ui::ratatui_adapter::DeveloperBrowser,
    DevfinderError,
};

type Result<T> = std::result::Result<T, DevfinderError>;

/// Execute the browse command
///
/// Starts a search worker over `backend` and runs the interactive browser
/// until the user quits. `filter` pre-fills the filter panel; the default
/// listing is still what is shown first.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or restored.
pub fn execute<B>(backend: B, filter: FilterState, tool_suggestions: Vec<String>) -> Result<()>
where
    B: SearchBackend + 'static,
{
    let worker = SearchWorker::spawn(backend);
    let session = SearchSession::with_filter(filter);

    tracing::info!("Starting interactive browser");
    let result = DeveloperBrowser::new(tool_suggestions).run(&worker, session);
    worker.detach();
    tracing::info!("Interactive browser closed");

    result.map_err(Into::into)
}
