use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;

use sizakat_backend::domain::{format_currency, format_rice_kg, ExportKind};
use sizakat_backend::ZakatBackend;

/// Collection reports and CSV exports for a SiZakat ledger.
#[derive(Parser, Debug)]
#[command(name = "sizakat-report", version, about, long_about = None)]
struct Cli {
    /// Data directory (defaults to $SIZAKAT_DATA_DIR or ~/Documents/SiZakat)
    #[arg(global = true, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory CSV exports are written to (defaults to the documents folder)
    #[arg(global = true, long = "out", value_name = "DIR")]
    out_dir: Option<String>,

    #[command(subcommand)]
    command: Option<ReportCommand>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportCommand {
    /// Totals for the whole ledger
    Summary,
    /// One line per configured RT
    Rt,
    /// Cash and rice per distribution bucket
    Distribution,
    /// Write the donor ledger as CSV
    ExportDonors,
    /// Write the RT report as CSV
    ExportRt,
}

fn run(cli: Cli) -> Result<()> {
    let backend = match &cli.data_dir {
        Some(dir) => ZakatBackend::open(dir)?,
        None => ZakatBackend::open_default()?,
    };
    let settings = backend.settings_service.get_settings()?;

    match cli.command.unwrap_or(ReportCommand::Summary) {
        ReportCommand::Summary => {
            let summary = backend.donor_service.summary()?;
            println!("{}", settings.mosque_name);
            println!("Families:      {} ({} people)", summary.total_families, summary.total_individuals);
            println!(
                "Cash:          {} from {} families",
                format_currency(summary.total_cash),
                summary.cash_families
            );
            println!(
                "Rice:          {} from {} families",
                format_rice_kg(summary.total_rice),
                summary.rice_families
            );
            println!("  @2.5 kg:     {} people, {}", summary.rice_2_5_individuals, format_rice_kg(summary.rice_2_5_kg));
            println!("  @3 kg:       {} people, {}", summary.rice_3_individuals, format_rice_kg(summary.rice_3_kg));
            println!("Infaq:         {}", format_currency(summary.total_infaq));
            println!("Infaq 2:       {}", format_currency(summary.total_infaq2));
            println!("Mosque infaq:  {}", format_currency(summary.total_mosque_infaq));

            let unassigned = backend.donor_service.unassigned_donors()?;
            if !unassigned.is_empty() {
                println!("{} donors have an RT outside the configured list", unassigned.len());
            }
        }
        ReportCommand::Rt => {
            for row in backend.donor_service.rt_summary()? {
                println!(
                    "RT {:<4} {:>3} families  {:>4} people  {:>16}  {:>10}",
                    row.rt_number,
                    row.summary.total_families,
                    row.summary.total_individuals,
                    format_currency(row.summary.total_cash),
                    format_rice_kg(row.summary.total_rice),
                );
            }
        }
        ReportCommand::Distribution => {
            let distribution = backend.donor_service.distribution()?;
            for (category, bucket) in distribution.buckets() {
                println!(
                    "{:<20} {:>16}  {:>10}",
                    category.label(),
                    format_currency(bucket.cash),
                    format_rice_kg(bucket.rice),
                );
            }
            println!(
                "{:<20} {:>16}  {:>10}",
                "Total",
                format_currency(distribution.total_cash()),
                format_rice_kg(distribution.total_rice()),
            );
        }
        ReportCommand::ExportDonors => export(&backend, ExportKind::Donors, cli.out_dir.as_deref())?,
        ReportCommand::ExportRt => export(&backend, ExportKind::RtSummary, cli.out_dir.as_deref())?,
    }
    Ok(())
}

fn export(backend: &ZakatBackend, kind: ExportKind, out_dir: Option<&str>) -> Result<()> {
    let exported = backend
        .export_service
        .export_to_path(kind, out_dir, &backend.donor_service)?;
    println!("Wrote {} rows to {}", exported.row_count, exported.file_path.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    info!("Running {:?}", cli.command.unwrap_or(ReportCommand::Summary));

    if let Err(e) = run(cli) {
        error!("sizakat-report failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
