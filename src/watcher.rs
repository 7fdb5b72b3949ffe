use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;

use log::info;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::{AppError, AppResult};

/// Watch a folder and invoke the handler for every newly created PDF.
///
/// Blocks the calling thread for as long as the watcher is alive. Handler
/// failures are the handler's business; the loop keeps running.
pub fn watch_folder<F>(folder: &Path, mut on_pdf: F) -> AppResult<()>
where
    F: FnMut(&Path),
{
    if !folder.exists() {
        return Err(AppError::Config(format!(
            "Pasta não existe: {}",
            folder.display()
        )));
    }

    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(folder, RecursiveMode::Recursive)?;
    info!("observando pasta {}", folder.display());

    while let Ok(event) = rx.recv() {
        if let EventKind::Create(_) = event.kind {
            for path in pdf_paths(event.paths) {
                info!("novo PDF detectado: {}", path.display());
                on_pdf(&path);
            }
        }
    }

    Ok(())
}

fn pdf_paths(paths: Vec<PathBuf>) -> impl Iterator<Item = PathBuf> {
    paths.into_iter().filter(|path| {
        path.extension()
            .map(|e| e == "pdf" || e == "PDF")
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_folder_is_rejected() {
        let result = watch_folder(Path::new("/nonexistent/pasta"), |_| {});
        assert!(result.is_err());
    }

    #[test]
    fn only_pdfs_pass_the_filter() {
        let paths = vec![
            PathBuf::from("/obra/contrato.pdf"),
            PathBuf::from("/obra/planta.dwg"),
            PathBuf::from("/obra/ORCAMENTO.PDF"),
            PathBuf::from("/obra/notas"),
        ];
        let kept: Vec<PathBuf> = pdf_paths(paths).collect();
        assert_eq!(
            kept,
            vec![
                PathBuf::from("/obra/contrato.pdf"),
                PathBuf::from("/obra/ORCAMENTO.PDF"),
            ]
        );
    }
}
