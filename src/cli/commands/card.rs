//! Planet card commands: the bundled sample planet and snapshot files

use super::shared::{RunSummary, print_json, setup_logging};
use crate::app::models::TabularRecord;
use crate::app::services::display::{PlanetCard, SpectralClass};
use crate::app::services::record_parser::parse_first_record;
use crate::app::services::sample_planet::sample_planet;
use crate::cli::args::{CardArgs, InspectArgs, OutputFormat};
use crate::constants::messages;
use crate::{Error, Result};
use colored::*;
use serde_json::json;
use tracing::{debug, info, warn};

/// Show the card of the bundled sample planet
pub fn run_sample(args: CardArgs) -> Result<RunSummary> {
    setup_logging(args.get_log_level())?;
    info!("Showing bundled sample planet");

    print_card(sample_planet(), &args)?;
    Ok(RunSummary::default())
}

/// Show the card of the first data row of a snapshot file
pub async fn run_inspect(args: InspectArgs) -> Result<RunSummary> {
    setup_logging(args.card.get_log_level())?;
    info!("Inspecting snapshot: {}", args.path.display());

    let text = tokio::fs::read_to_string(&args.path).await.map_err(|e| {
        Error::io(format!("Failed to read snapshot {}", args.path.display()), e)
    })?;

    let record = parse_first_record(&text).unwrap_or_else(|| {
        warn!("No data row found in {}", args.path.display());
        TabularRecord::new()
    });
    debug!("Parsed record with {} columns", record.len());

    print_card(&record, &args.card)?;
    Ok(RunSummary::default())
}

fn print_card(record: &TabularRecord, args: &CardArgs) -> Result<()> {
    let Some(mut card) = PlanetCard::from_record(record) else {
        match args.format {
            OutputFormat::Human => {
                println!("{}", messages::NO_PLANET_HEADING.bold());
                println!("{}", messages::NO_PLANET_BODY.dimmed());
            }
            OutputFormat::Json => print_json(&json!({
                "heading": messages::NO_PLANET_HEADING,
                "body": messages::NO_PLANET_BODY,
            }))?,
        }
        return Ok(());
    };

    card.retain_groups(&args.group.groups());

    match args.format {
        OutputFormat::Human => print_human(&card),
        OutputFormat::Json => print_json(&card)?,
    }
    Ok(())
}

fn print_human(card: &PlanetCard) {
    let badge = format!("[{}]", card.disposition);
    match &card.score {
        Some(score) => println!(
            "{}  {}",
            badge.bright_cyan().bold(),
            format!("Disposition score: {}", score).dimmed()
        ),
        None => println!("{}", badge.bright_cyan().bold()),
    }
    println!("Kepler ID {}", card.koi_id);
    println!("{}", card.kepler_name.bold());
    if let Some(kepid) = &card.kepid {
        println!("{}", format!("Catalog KepID: {}", kepid).dimmed());
    }

    for section in &card.sections {
        println!();
        println!("{}", section.label.bright_blue().bold());
        for row in &section.rows {
            match row.swatch {
                Some(class) => println!(
                    "  {:<38} {} {}",
                    row.label,
                    swatch(class),
                    row.value
                ),
                None => println!("  {:<38} {}", row.label, row.value),
            }
        }
    }
}

fn swatch(class: SpectralClass) -> ColoredString {
    let (r, g, b) = class.color_rgb();
    "●".truecolor(r, g, b)
}
