use std::collections::HashSet;
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use validator::Validate;

use crate::catalog;
use crate::cli::args::{Cli, Commands};
use crate::error::{FactorError, Result};
use crate::processors::ReportBuilder;
use crate::utils::constants::DEFAULT_OUTPUT_FILE;
use crate::utils::progress::ProgressReporter;
use crate::weather::WeatherSource;
use crate::writers::ReportWriter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Report {
            output_file,
            offline,
            quiet,
        } => {
            let output_file = output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

            let source = if offline {
                tracing::info!("offline mode: synthetic observations only");
                WeatherSource::Synthetic
            } else {
                WeatherSource::from_env()
            };

            let builder = ReportBuilder::new();
            let progress = ProgressReporter::new(
                builder.stadium_count() as u64,
                "Building park factor report...",
                quiet,
            );

            let report = builder.build(&source, Some(&progress)).await?;
            progress.finish_with_message(&format!("Processed {} stadiums", report.factors.len()));

            let writer = ReportWriter::new();
            writer.write_report(&report, &output_file)?;

            println!("{}", writer.render(&report)?);
            tracing::info!("report written to {}", output_file.display());
        }

        Commands::Show { file, team } => {
            let file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
            let writer = ReportWriter::new();
            let report = writer.read_report(&file)?;

            match team {
                Some(code) => {
                    let row = report.find_team(&code).ok_or_else(|| FactorError::TeamNotFound {
                        team: code.to_uppercase(),
                    })?;

                    println!("{} ({})", row.ballpark, row.team);
                    println!("Location: {}, {}", row.city, row.state);
                    println!(
                        "Weather: {}, {}",
                        row.temperature_range, row.weather_condition
                    );
                    println!("Wind: {}", row.wind_summary());
                    println!(
                        "Factors: HR {:.1}, 2B {:.1}, 1B {:.1}, R {:.1} ({})",
                        row.hr_factor,
                        row.doubles_factor,
                        row.singles_factor,
                        row.runs_factor,
                        row.overall_rating
                    );
                }
                None => {
                    println!("Park factors generated {}", report.date);
                    for (i, row) in report.factors.iter().enumerate() {
                        println!(
                            "{:2}. {:<25} R {:>5.1}  HR {:>5.1}  {}",
                            i + 1,
                            row.ballpark,
                            row.runs_factor,
                            row.hr_factor,
                            row.overall_rating
                        );
                    }
                }
            }
        }

        Commands::Validate => {
            let progress = ProgressReporter::new_spinner("Validating static tables...", false);

            let stadiums = catalog::stadiums();
            let factors = catalog::base_factors();

            let mut issues = Vec::new();
            let mut seen = HashSet::new();

            for stadium in &stadiums {
                if let Err(e) = stadium.validate() {
                    issues.push(format!("{}: {}", stadium.name, e));
                }
                if !seen.insert(stadium.team_code.clone()) {
                    issues.push(format!(
                        "{}: duplicate team code {}",
                        stadium.name, stadium.team_code
                    ));
                }
                if !factors.contains_key(&stadium.team_code) {
                    issues.push(format!(
                        "{}: no base factors for {} (neutral fallback applies)",
                        stadium.name, stadium.team_code
                    ));
                }
            }

            progress.finish_with_message("Validation complete");

            println!(
                "Checked {} stadiums against {} base factor entries",
                stadiums.len(),
                factors.len()
            );

            if issues.is_empty() {
                println!("✅ All catalog entries passed validation checks");
            } else {
                println!("⚠️  Found {} validation issues", issues.len());
                for issue in &issues {
                    println!("  - {}", issue);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "parkfactor_processor=debug"
    } else {
        "parkfactor_processor=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
