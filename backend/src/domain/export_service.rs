//! CSV exports of the donor ledger and the per-RT report.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use log::{error, info};
use serde::{Deserialize, Serialize};
use shared::{DonorRecord, RtSummary, ZakatSummary};
use std::fs;
use std::path::PathBuf;

use crate::domain::donor_service::DonorService;

/// Which report to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Donors,
    RtSummary,
}

impl ExportKind {
    fn file_prefix(&self) -> &'static str {
        match self {
            ExportKind::Donors => "zakat_donors",
            ExportKind::RtSummary => "zakat_rt_summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportData {
    pub csv_content: String,
    pub filename: String,
    /// Data rows written, excluding header and total lines
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_path: PathBuf,
    pub row_count: usize,
}

#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Build the CSV for `kind` from the current ledger
    pub fn export(&self, kind: ExportKind, donor_service: &DonorService) -> Result<ExportData> {
        info!("Exporting {:?} as CSV", kind);

        let (csv_content, row_count) = match kind {
            ExportKind::Donors => {
                let donors = donor_service.list_donors()?;
                (donors_csv(&donors)?, donors.len())
            }
            ExportKind::RtSummary => {
                let rows = donor_service.rt_summary()?;
                (rt_summary_csv(&rows)?, rows.len())
            }
        };

        let filename = format!("{}_{}.csv", kind.file_prefix(), Local::now().format("%Y%m%d"));
        info!("Generated {} ({} rows, {} bytes)", filename, row_count, csv_content.len());

        Ok(ExportData {
            csv_content,
            filename,
            row_count,
        })
    }

    /// Export and write the file into `custom_path`, or the documents folder
    /// when no path is given
    pub fn export_to_path(
        &self,
        kind: ExportKind,
        custom_path: Option<&str>,
        donor_service: &DonorService,
    ) -> Result<ExportedFile> {
        info!("Exporting {:?} to path {:?}", kind, custom_path);
        let export = self.export(kind, donor_service)?;

        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(sanitize_path(path)),
            _ => dirs::document_dir().or_else(dirs::home_dir).ok_or_else(|| {
                error!("Could not determine default export directory");
                anyhow!("Failed to determine export directory")
            })?,
        };

        fs::create_dir_all(&export_dir)
            .with_context(|| format!("Failed to create export directory {:?}", export_dir))?;

        let file_path = export_dir.join(&export.filename);
        fs::write(&file_path, &export.csv_content).map_err(|e| {
            error!("Failed to write export file to {:?}: {}", file_path, e);
            anyhow!("Failed to write export file {:?}: {}", file_path, e)
        })?;

        info!("Exported {} rows to {:?}", export.row_count, file_path);
        Ok(ExportedFile {
            file_path,
            row_count: export.row_count,
        })
    }
}

/// Clean up a user-typed directory: quotes, escaped spaces, trailing
/// separators and a leading `~`
fn sanitize_path(path: &str) -> String {
    let mut cleaned = path.trim();
    if cleaned.len() >= 2
        && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
            || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
    {
        cleaned = cleaned[1..cleaned.len() - 1].trim();
    }

    let mut cleaned = cleaned.replace("\\ ", " ");
    while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
        cleaned.pop();
    }

    if let Some(home) = dirs::home_dir() {
        if cleaned == "~" {
            return home.to_string_lossy().to_string();
        }
        if let Some(rest) = cleaned.strip_prefix("~/").or_else(|| cleaned.strip_prefix("~\\")) {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    cleaned
}

fn donors_csv(donors: &[DonorRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "head_of_family",
        "family_count",
        "rt_number",
        "rw_number",
        "payment_method",
        "payment_type",
        "cash_amount",
        "rice_kg",
        "infaq_amount",
        "infaq_amount2",
        "mosque_infaq_amount",
        "payment_date",
        "payment_time",
        "collector_name",
    ])?;

    for donor in donors {
        writer.write_record([
            donor.id.clone(),
            donor.head_of_family.clone(),
            donor.family_count.to_string(),
            donor.rt_number.clone(),
            donor.rw_number.clone().unwrap_or_default(),
            donor.payment_method().to_string(),
            donor.payment_type.as_str().to_string(),
            donor.cash_amount().to_string(),
            donor.rice_amount().to_string(),
            donor.infaq_amount.to_string(),
            donor.infaq_amount2.to_string(),
            donor.mosque_infaq_amount.to_string(),
            donor.payment_date.clone(),
            donor.payment_time.clone(),
            donor.collector_name.clone().unwrap_or_default(),
        ])?;
    }

    finish(writer)
}

fn rt_summary_csv(rows: &[RtSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "rt_number",
        "families",
        "individuals",
        "cash_amount",
        "rice_kg",
        "rice_2_5_individuals",
        "rice_2_5_kg",
        "rice_3_individuals",
        "rice_3_kg",
        "infaq_amount",
        "infaq_amount2",
    ])?;

    let mut grand_total = ZakatSummary::default();
    for row in rows {
        writer.write_record(summary_record(&row.rt_number, &row.summary))?;
        add_into(&mut grand_total, &row.summary);
    }
    writer.write_record(summary_record("TOTAL", &grand_total))?;

    finish(writer)
}

fn summary_record(label: &str, summary: &ZakatSummary) -> Vec<String> {
    vec![
        label.to_string(),
        summary.total_families.to_string(),
        summary.total_individuals.to_string(),
        summary.total_cash.to_string(),
        summary.total_rice.to_string(),
        summary.rice_2_5_individuals.to_string(),
        summary.rice_2_5_kg.to_string(),
        summary.rice_3_individuals.to_string(),
        summary.rice_3_kg.to_string(),
        summary.total_infaq.to_string(),
        summary.total_infaq2.to_string(),
    ]
}

fn add_into(total: &mut ZakatSummary, row: &ZakatSummary) {
    total.total_families += row.total_families;
    total.total_individuals += row.total_individuals;
    total.total_cash += row.total_cash;
    total.total_rice += row.total_rice;
    total.rice_2_5_individuals += row.rice_2_5_individuals;
    total.rice_2_5_kg += row.rice_2_5_kg;
    total.rice_3_individuals += row.rice_3_individuals;
    total.rice_3_kg += row.rice_3_kg;
    total.total_infaq += row.total_infaq;
    total.total_infaq2 += row.total_infaq2;
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{sample_cash_donor, sample_rice_donor, TestEnvironment};
    use crate::storage::DonorStorage;
    use tempfile::TempDir;

    fn seeded_service() -> (DonorService, TestEnvironment) {
        let env = TestEnvironment::in_memory();
        let mut with_comma = sample_cash_donor("donor::1", "01", 4);
        with_comma.head_of_family = "Ahmad, S.Pd".to_string();
        env.donor_repo.store_donor(&with_comma).unwrap();
        env.donor_repo
            .store_donor(&sample_rice_donor("donor::2", "03", 2, 5.0))
            .unwrap();
        (DonorService::new(env.store.clone()), env)
    }

    #[test]
    fn test_sanitize_path() {
        let home_dir = dirs::home_dir().unwrap();
        let expected_documents = home_dir.join("Documents").to_string_lossy().to_string();

        assert_eq!(sanitize_path("\"~/Documents\""), expected_documents);
        assert_eq!(sanitize_path("'~/Documents'"), expected_documents);
        assert_eq!(sanitize_path("~"), home_dir.to_string_lossy());
        assert_eq!(sanitize_path("  /path/to/dir  "), "/path/to/dir");
        assert_eq!(sanitize_path("/path\\ to\\ dir"), "/path to dir");
        assert_eq!(sanitize_path("/path/to/dir/"), "/path/to/dir");
        assert_eq!(sanitize_path("/path/to/dir\\"), "/path/to/dir");
        assert_eq!(sanitize_path("/"), "/");
    }

    #[test]
    fn test_donors_csv_quotes_and_amounts() {
        let (donor_service, _env) = seeded_service();
        let export = ExportService::new()
            .export(ExportKind::Donors, &donor_service)
            .unwrap();

        assert_eq!(export.row_count, 2);
        assert!(export.filename.starts_with("zakat_donors_"));
        assert!(export.filename.ends_with(".csv"));

        let lines: Vec<&str> = export.csv_content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,head_of_family,family_count"));
        assert!(lines[1].starts_with("donor::1,\"Ahmad, S.Pd\",4,01,01,cash,tunai,180000,0,"));
        assert!(lines[2].contains(",rice,tunai,0,5,"));
    }

    #[test]
    fn test_rt_summary_csv_has_row_per_rt_and_total() {
        let (donor_service, _env) = seeded_service();
        let export = ExportService::new()
            .export(ExportKind::RtSummary, &donor_service)
            .unwrap();

        let lines: Vec<&str> = export.csv_content.lines().collect();
        // header + 5 default RTs + total
        assert_eq!(lines.len(), 7);
        assert_eq!(export.row_count, 5);
        assert!(lines[1].starts_with("01,1,4,180000,0,"));
        assert!(lines[3].starts_with("03,1,2,0,5,2,5,"));
        assert!(lines[6].starts_with("TOTAL,2,6,180000,5,"));
    }

    #[test]
    fn test_export_to_custom_path() {
        let (donor_service, _env) = seeded_service();
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("reports");

        let exported = ExportService::new()
            .export_to_path(
                ExportKind::Donors,
                Some(&format!("\"{}/\"", target.display())),
                &donor_service,
            )
            .unwrap();

        assert_eq!(exported.row_count, 2);
        assert!(exported.file_path.starts_with(&target));
        let written = fs::read_to_string(&exported.file_path).unwrap();
        assert!(written.contains("Ahmad, S.Pd"));
    }
}
