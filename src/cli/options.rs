//! Options command - list the biomass catalog and the feature keys

use crate::cli::style::Stylize;
use anstream::println;
use capacity_predict::types::{BIOMASS_CATALOG, FEATURE_MAPPING};

/// Run the options command
pub fn run_options() {
    println!("{}", "Biomass".emphasis());
    for biomass in BIOMASS_CATALOG {
        println!("  {biomass}");
    }
    println!();

    let width = FEATURE_MAPPING
        .iter()
        .map(|(_, key)| key.len())
        .max()
        .unwrap_or_default();

    println!("{}", "Features".emphasis());
    println!("  {}", format!("{:<width$}  {}", "KEY", "LABEL").muted());
    for (label, key) in FEATURE_MAPPING {
        println!("  {}  {label}", format!("{key:<width$}").accent());
    }
    println!();
    println!(
        "{}",
        "Pass features as --feature \"<KEY>=<value>\", e.g. --feature \"Cycle N=100\"".muted()
    );
}
