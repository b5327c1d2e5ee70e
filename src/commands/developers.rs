//! Developers command - one-shot developer search

use crate::{
    api::{Developer, PagedResult, SearchBackend},
    output,
    search::{DeveloperQuery, FilterState, QueryOverrides},
    ui::OutputWriter,
    DevfinderError,
};

type Result<T> = std::result::Result<T, DevfinderError>;

/// Run a filtered search for a single page
///
/// The filter is treated as submitted, so the requested page is honoured.
///
/// # Errors
/// Returns an error if the backend request fails.
pub fn search<B: SearchBackend + ?Sized>(
    backend: &B,
    mut filter: FilterState,
    page: u32,
) -> Result<(DeveloperQuery, PagedResult<Developer>)> {
    if page == 0 {
        return Err(DevfinderError::InvalidInput("Pages start at 1".into()));
    }
    filter.search_mode_active = true;
    filter.page = page;

    let query = filter.to_query(&QueryOverrides::none());
    tracing::debug!(?query, "Searching developers");
    let result = backend.search_developers(&query)?;
    Ok((query, result))
}

/// Execute the developers command
///
/// # Errors
/// Returns an error if the search fails or JSON output cannot be produced.
pub fn execute<B: SearchBackend + ?Sized>(
    backend: &B,
    filter: FilterState,
    page: u32,
    json: bool,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let (query, result) = search(backend, filter, page)?;

    if json {
        out.write(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        if !quiet {
            out.info("No developers found.");
        }
        return Ok(());
    }

    for dev in &result.hits {
        out.write(&output::developer_line(dev, quiet));
    }
    if !quiet {
        out.info(&output::page_summary(&result, query.page, "developers"));
    }
    Ok(())
}
