//! Estimate sheet ingestion.

use std::path::Path;

use shipkeep_core::{EstimateSheet, MaterialKind};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{format_json, format_table};
use crate::OutputFormat;

/// Parse a CSV export of an estimate sheet into materials profiles.
///
/// There is no equipment store behind the CLI, so each profile's equipment
/// id is the equipment name. Profiles are listed by ordering key; entries
/// without a usable path have key `0` and come first.
pub fn run(
    config: &Config,
    file: &Path,
    sector: &str,
    maintenance: &str,
    format: OutputFormat,
) -> Result<()> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }
    let sector = config
        .catalog
        .sector(sector)
        .ok_or_else(|| CliError::UnknownSector(sector.trim().to_string()))?;

    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_path(file)?;
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    let sheet = EstimateSheet::parse(&records, &config.sheet)?;
    info!(
        file = %file.display(),
        sector = %sector.name,
        entries = sheet.len(),
        "parsed estimate sheet"
    );

    let unplaced = sheet.entries().iter().filter(|e| e.index.is_none()).count();
    if unplaced > 0 {
        warn!(unplaced, "entries without a usable index path");
    }

    let mut profiles = sheet.into_profiles(maintenance, &sector.name, str::to_owned);
    profiles.sort_by_key(|p| p.index);

    match format {
        OutputFormat::Table => {
            let rows = profiles
                .iter()
                .map(|p| {
                    let count = |kind: MaterialKind| {
                        p.estimate.iter().filter(|(k, _)| *k == kind).count()
                    };
                    vec![
                        p.index_path(),
                        p.equipment_machinery_id.clone(),
                        count(MaterialKind::Replacement).to_string(),
                        count(MaterialKind::Consumable).to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                format_table(["index", "equipment", "replacement", "consumable"], rows)
            );
        }
        OutputFormat::Json => println!("{}", format_json(&profiles)?),
        OutputFormat::Plain => {
            for profile in &profiles {
                println!("{}\t{}", profile.index_path(), profile.equipment_machinery_id);
            }
        }
    }
    Ok(())
}
