//! Output formatting for CLI display
//!
//! Formats developer and project hits for the one-shot commands. Quiet mode
//! prints one bare identifier per line so the output can be piped.

use crate::api::{Developer, PagedResult, Project};
use crate::ui::Pager;
use colored::Colorize;

/// Format a developer as a single line
#[must_use]
pub fn developer_line(dev: &Developer, quiet: bool) -> String {
    if quiet {
        return dev.login.clone();
    }

    let mut line = format!("  {}", dev.display_name().bold());
    if dev.name.is_some() {
        line.push_str(&format!(" ({})", dev.login.cyan()));
    }
    if let Some(location) = &dev.location {
        line.push_str(&format!(" - {location}"));
    }
    if !dev.languages.is_empty() {
        line.push_str(&format!(" [{}]", dev.languages.join(", ")));
    }
    line
}

/// Format a project as a card (name, stars, language, description, link)
#[must_use]
pub fn project_card(project: &Project, quiet: bool) -> String {
    if quiet {
        return project.name.clone();
    }

    let mut card = format!(
        "  {} {}",
        project.name.bold(),
        format!("★ {}", project.stargazers_count).yellow()
    );
    if let Some(language) = &project.language {
        card.push_str(&format!(" {}", format!("[{language}]").cyan()));
    }
    if let Some(description) = &project.description {
        card.push_str(&format!("\n    {description}"));
    }
    if let Some(url) = &project.html_url {
        card.push_str(&format!("\n    {}", url.dimmed()));
    }
    card
}

/// Summary line for a result page, e.g. `Page 2 of 3 (45 developers)`
#[must_use]
pub fn page_summary<T>(result: &PagedResult<T>, page: u32, noun: &str) -> String {
    let pager = Pager::new(page, result.nb_hits, result.limit);
    if pager.total_pages() == 0 {
        return format!("No {noun} found.");
    }
    format!(
        "Page {} of {} ({} {noun})",
        pager.current(),
        pager.total_pages(),
        result.nb_hits
    )
}
