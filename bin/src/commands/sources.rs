//! Sources command implementation.

use anyhow::Result;
use macroetl_lib::prelude::*;

/// Lists the registered sources with their required parameters.
pub(crate) fn list_sources() -> Result<()> {
    let registry = SourceRegistry::global();

    println!("{:<10} {:<36} {}", "NAME", "PARAMS", "DESCRIPTION");
    println!("{}", "-".repeat(90));

    for spec in registry.all() {
        println!(
            "{:<10} {:<36} {}",
            spec.name(),
            spec.required_params().join(", "),
            spec.description()
        );
    }

    println!("\nTotal: {} sources", registry.len());
    Ok(())
}
