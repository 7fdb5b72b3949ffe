//! Export of the materials list to CSV and XLSX files.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::warn;
use rust_xlsxwriter::Workbook;

use crate::error::AppResult;
use crate::materials::MaterialRecord;

/// Export target, selectable on the command line or in settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Both,
}

impl ExportFormat {
    /// Parse a settings value; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(ExportFormat::Csv),
            "xlsx" => Some(ExportFormat::Xlsx),
            "both" => Some(ExportFormat::Both),
            _ => None,
        }
    }
}

/// Column headers, in record field order.
const HEADERS: [&str; 4] = ["item", "especificacao", "unidade", "quantidade"];

/// Fallback base name when no source PDF name is available.
const DEFAULT_STEM: &str = "projeto";

/// Derive the export base name from the source PDF file name: the `.pdf`
/// extension is stripped case-insensitively, and an empty name falls back
/// to a placeholder.
pub fn export_stem(pdf_name: &str) -> String {
    // `get` instead of indexing: len - 4 may fall inside a multibyte
    // character when the name does not end in ASCII ".pdf".
    let stem = if pdf_name.len() >= 4
        && pdf_name
            .get(pdf_name.len() - 4..)
            .is_some_and(|s| s.eq_ignore_ascii_case(".pdf"))
    {
        &pdf_name[..pdf_name.len() - 4]
    } else {
        pdf_name
    };

    if stem.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// Path for the CSV export: `<out_dir>/materiais_<basename>.csv`
pub fn csv_path(out_dir: &Path, pdf_name: &str) -> PathBuf {
    out_dir.join(format!("materiais_{}.csv", export_stem(pdf_name)))
}

/// Path for the XLSX export: `<out_dir>/materiais_<basename>.xlsx`
pub fn xlsx_path(out_dir: &Path, pdf_name: &str) -> PathBuf {
    out_dir.join(format!("materiais_{}.xlsx", export_stem(pdf_name)))
}

/// Write the records as semicolon-delimited, UTF-8 CSV.
///
/// Fields containing a quote, semicolon or line break are wrapped in double
/// quotes with internal quotes doubled; the header row comes first. An
/// empty record list writes nothing and returns `false`.
pub fn write_csv(records: &[MaterialRecord], path: &Path) -> AppResult<bool> {
    if records.is_empty() {
        warn!("lista de materiais vazia, CSV não gerado");
        return Ok(false);
    }

    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(true)
}

/// Write the records as an XLSX workbook with a single "Materiais" sheet.
///
/// An empty record list writes nothing and returns `false`.
pub fn write_xlsx(records: &[MaterialRecord], path: &Path) -> AppResult<bool> {
    if records.is_empty() {
        warn!("lista de materiais vazia, XLSX não gerado");
        return Ok(false);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Materiais")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &record.item)?;
        worksheet.write_string(row, 1, &record.especificacao)?;
        worksheet.write_string(row, 2, &record.unidade)?;
        worksheet.write_string(row, 3, &record.quantidade)?;
    }

    workbook.save(path)?;
    Ok(true)
}
