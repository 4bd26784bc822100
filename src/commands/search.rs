//! Search command
//!
//! Queries every selected manager and concatenates the hits, npm first.

use crate::core::types::{ManagerChoice, PackageRecord};
use crate::error::Result;
use crate::traits::AppContext;
use crate::ui::{self as output, table};
use crate::utils::sanitize;

pub struct SearchOptions {
    pub query: String,
    pub choice: ManagerChoice,
    /// Results kept per manager
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, options: SearchOptions) -> Result<()> {
    let results = collect(ctx, &options)?;

    if results.is_empty() {
        output::info(&format!("No packages found matching '{}'", options.query));
        return Ok(());
    }

    table::render(table::TableKind::Search, &results);
    output::info(&format!(
        "Found {} package{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}

pub fn collect(ctx: &AppContext, options: &SearchOptions) -> Result<Vec<PackageRecord>> {
    sanitize::validate_search_query(&options.query)?;

    let managers = ctx.registry.select(options.choice)?;
    let gathered = super::gather(&managers, |manager| {
        let mut hits = manager.search(&options.query)?;
        if let Some(limit) = options.limit {
            hits.truncate(limit);
        }
        output::verbose(&format!("{}: {} result(s)", manager.manager(), hits.len()));
        Ok(hits)
    })?;
    super::report_failures(&gathered.failures);

    Ok(gathered.records)
}
