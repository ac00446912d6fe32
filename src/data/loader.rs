use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use eframe::egui;
use thiserror::Error;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read at all.
    #[error("source unavailable at {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text was read but has no usable header row.
    #[error("malformed source: {0}")]
    MalformedSource(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse the survey CSV at `path`.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            LoadError::MalformedSource(format!("{} is not valid UTF-8", path.display()))
        } else {
            LoadError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let dataset = parse_str(&text)?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.headers,
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV text: first line is the header, every following line a record.
///
/// Records may be shorter or longer than the header; only the fields that are
/// actually present are stored on the row.
pub fn parse_str(text: &str) -> Result<Dataset, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::MalformedSource(format!("reading CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(LoadError::MalformedSource("missing header row".into()));
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping CSV row {row_no}: {e}");
                continue;
            }
        };
        let row = Row::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, value)| (name.as_str(), value)),
        );
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

// ---------------------------------------------------------------------------
// Background load
// ---------------------------------------------------------------------------

/// Run [`load`] on a loader thread. The result arrives once on the returned
/// channel and a repaint is requested so the UI picks it up.
pub fn spawn_load(path: PathBuf, ctx: egui::Context) -> Receiver<Result<Dataset, LoadError>> {
    let (tx, rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("ges-loader".into())
        .spawn({
            let tx = tx.clone();
            let path = path.clone();
            move || {
                let result = load(&path);
                // The receiver only disappears when the window is closing.
                let _ = tx.send(result);
                ctx.request_repaint();
            }
        });

    if let Err(source) = spawned {
        log::error!("Could not start loader thread: {source}");
        let _ = tx.send(Err(LoadError::SourceUnavailable { path, source }));
    }
    rx
}
