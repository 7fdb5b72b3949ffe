use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{error, info};

use obramat::catalog::{self, Phase};
use obramat::error::{AppError, AppResult};
use obramat::export::{self, ExportFormat};
use obramat::materials::{extract_materials, MaterialRecord};
use obramat::pdf_text;
use obramat::settings::{load_settings, save_settings, AppSettings, DEFAULT_FORMAT};
use obramat::watcher;

#[derive(Parser)]
#[command(
    name = "obramat",
    version,
    about = "Análise de PDF de obra: lista de materiais e catálogo de ações por fase"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extrai a lista de materiais de um PDF e exporta CSV/XLSX
    Extract {
        /// Arquivo PDF de entrada
        pdf: PathBuf,
        /// Formato de exportação (padrão vem das configurações)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Pasta de saída (padrão: pasta do PDF)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Imprime o texto bruto extraído, para conferência
        #[arg(long)]
        show_text: bool,
    },
    /// Lista as fases e ações do catálogo
    Catalog {
        /// Fase do catálogo
        #[arg(long, value_enum)]
        phase: Option<Phase>,
        /// Filtro por substring (título + resumo + tags)
        #[arg(long, default_value = "")]
        query: String,
        /// Imprime o prompt de uma ação pelo id
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Observa uma pasta e exporta automaticamente os PDFs novos
    Watch {
        /// Pasta a observar (padrão: a última configurada)
        folder: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Erro: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Extract {
            pdf,
            format,
            out_dir,
            show_text,
        } => cmd_extract(&pdf, format, out_dir, show_text),
        Command::Catalog {
            phase,
            query,
            prompt,
        } => cmd_catalog(phase, &query, prompt.as_deref()),
        Command::Watch { folder } => cmd_watch(folder),
    }
}

fn cmd_extract(
    pdf: &Path,
    format: Option<ExportFormat>,
    out_dir: Option<PathBuf>,
    show_text: bool,
) -> AppResult<()> {
    let info = pdf_text::pdf_info(pdf)?;
    info!("PDF: {} ({} bytes)", info.file_name, info.size_bytes);

    let transcript = pdf_text::extract_transcript(pdf)?;
    if show_text {
        println!("--- Texto bruto extraído ---");
        println!("{}", transcript.trim());
        println!("----------------------------");
    }

    let records = extract_materials(&transcript);
    if records.is_empty() {
        println!("Nada detectado. Se o PDF for escaneado (imagem), seria necessário OCR.");
        return Ok(());
    }

    print_table(&records);

    let settings = load_settings();
    let format = resolve_format(format, &settings);
    let out_dir = out_dir
        .or_else(|| settings.output_dir.clone().map(PathBuf::from))
        .or_else(|| pdf.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    for path in export_records(&records, &info.file_name, &out_dir, format)? {
        println!("Arquivo gerado: {}", path.display());
    }
    Ok(())
}

fn cmd_catalog(phase: Option<Phase>, query: &str, prompt_id: Option<&str>) -> AppResult<()> {
    if let Some(id) = prompt_id {
        let (phase, action) = catalog::find_action(id)
            .ok_or_else(|| AppError::Config(format!("Ação não encontrada: {}", id)))?;
        info!("prompt de '{}' (fase {})", action.title, phase.id());
        println!("{}", action.prompt);
        return Ok(());
    }

    let Some(phase) = phase else {
        println!("Fases disponíveis:");
        for phase in Phase::ALL {
            println!(
                "  {:<13} {} ({} ações)",
                phase.id(),
                phase.label(),
                catalog::actions_for(phase).len()
            );
        }
        return Ok(());
    };

    let actions = catalog::filter_actions(phase, query);
    if actions.is_empty() {
        println!("Nenhuma ação encontrada com o filtro atual.");
        return Ok(());
    }

    println!("{}", phase.label());
    for action in actions {
        println!("  [{}] {} — {}", action.id, action.title, action.summary);
        if !action.tags.is_empty() {
            println!("      tags: {}", action.tags.join(", "));
        }
        if let Some(metric) = action.metric {
            println!("      saída: {}", metric);
        }
    }
    Ok(())
}

fn cmd_watch(folder: Option<PathBuf>) -> AppResult<()> {
    let mut settings = load_settings();
    let folder = folder
        .or_else(|| settings.watch_folder.clone().map(PathBuf::from))
        .ok_or_else(|| {
            AppError::Config("Nenhuma pasta configurada. Informe: obramat watch <pasta>".to_string())
        })?;

    settings.watch_folder = Some(folder.to_string_lossy().to_string());
    save_settings(&settings)?;

    let format = resolve_format(None, &settings);
    let output_dir = settings.output_dir.clone().map(PathBuf::from);

    watcher::watch_folder(&folder, |pdf| {
        if let Err(e) = process_watched_pdf(pdf, format, output_dir.as_deref()) {
            error!("falha ao processar {}: {}", pdf.display(), e);
        }
    })
}

/// Extraction + export for one PDF found by the watcher.
fn process_watched_pdf(
    pdf: &Path,
    format: ExportFormat,
    output_dir: Option<&Path>,
) -> AppResult<()> {
    let file_name = pdf
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let transcript = pdf_text::extract_transcript(pdf)?;
    let records = extract_materials(&transcript);
    if records.is_empty() {
        info!("{}: nenhum material detectado", file_name);
        return Ok(());
    }

    let out_dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| pdf.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    for path in export_records(&records, &file_name, &out_dir, format)? {
        info!("{}: {} materiais -> {}", file_name, records.len(), path.display());
    }
    Ok(())
}

/// Write the selected export formats, returning the files actually written.
fn export_records(
    records: &[MaterialRecord],
    pdf_name: &str,
    out_dir: &Path,
    format: ExportFormat,
) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let path = export::csv_path(out_dir, pdf_name);
        if export::write_csv(records, &path)? {
            written.push(path);
        }
    }
    if matches!(format, ExportFormat::Xlsx | ExportFormat::Both) {
        let path = export::xlsx_path(out_dir, pdf_name);
        if export::write_xlsx(records, &path)? {
            written.push(path);
        }
    }
    Ok(written)
}

fn resolve_format(cli_format: Option<ExportFormat>, settings: &AppSettings) -> ExportFormat {
    cli_format
        .or_else(|| {
            settings
                .export_format
                .as_deref()
                .and_then(ExportFormat::from_name)
        })
        .or_else(|| ExportFormat::from_name(DEFAULT_FORMAT))
        .unwrap_or(ExportFormat::Csv)
}

fn print_table(records: &[MaterialRecord]) {
    let item_width = records
        .iter()
        .map(|r| r.item.chars().count())
        .chain(std::iter::once("Item".len()))
        .max()
        .unwrap_or(4);

    println!("Materiais detectados (heurística): {}", records.len());
    println!(
        "{:<width$}  {}",
        "Item",
        "Especificação (linha de origem)",
        width = item_width
    );
    for record in records {
        println!(
            "{:<width$}  {}",
            record.item,
            record.especificacao,
            width = item_width
        );
    }
}
