//! `docsite routes`: list routes derived from content.

use anyhow::Result;
use serde::Serialize;

use crate::config::LoadOptions;
use crate::log;
use crate::route::{RouteRecord, RouteTable};
use crate::site::read_config;
use crate::utils::plural::plural_count;

#[derive(Debug, Serialize)]
struct RoutesOutput<'a> {
    routes: Vec<RouteRecord<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conflicts: Vec<ConflictRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct ConflictRecord<'a> {
    route: &'a str,
    sources: [&'a str; 2],
}

/// Validate the config, scan content and print the route table.
pub fn run_routes(options: &LoadOptions, pretty: bool) -> Result<()> {
    let mut config = read_config(options)?;
    config.apply_overrides(options);
    let sidebars = config.validate()?;
    let table = RouteTable::scan(&config, sidebars.as_ref())?;

    let output = RoutesOutput {
        routes: table.records(),
        conflicts: table
            .conflicts()
            .iter()
            .map(|c| ConflictRecord {
                route: &c.route,
                sources: [c.first.as_str(), c.second.as_str()],
            })
            .collect(),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    crate::debug!("routes"; "{}", plural_count(table.len(), "route"));
    if !output.conflicts.is_empty() {
        log!("warning"; "{}", plural_count(output.conflicts.len(), "route conflict"));
    }
    Ok(())
}
