//! Catalog command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::{format_json, format_table};
use crate::OutputFormat;

/// Show the configured sectors and maintenance tiers.
pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let catalog = &config.catalog;
    match format {
        OutputFormat::Table => {
            let rows = catalog
                .sectors
                .iter()
                .map(|s| vec![s.name.clone(), s.short_code.clone()])
                .collect();
            println!("{}", format_table(["sector", "code"], rows));
            println!("tiers: {}", catalog.maintenance_tiers.join(", "));
            println!("request prefix: {}", catalog.request_prefix);
        }
        OutputFormat::Json => println!("{}", format_json(catalog)?),
        OutputFormat::Plain => {
            for sector in &catalog.sectors {
                println!("{}\t{}", sector.short_code, sector.name);
            }
        }
    }
    Ok(())
}
