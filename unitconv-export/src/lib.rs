//! unitconv Export - conversion history as a flat PDF
//!
//! One title line, then one line per history entry, top to bottom on A4
//! pages in 12pt Helvetica.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use serde::Serialize;
use thiserror::Error;

/// Where the history goes unless configured otherwise
pub const DEFAULT_EXPORT_FILE: &str = "conversion_history.pdf";

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_MM: f32 = 10.0;
const LINE_PITCH_MM: f32 = 10.0;
const FONT_SIZE: f32 = 12.0;
const LINES_PER_PAGE: usize = 27;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no conversion history to export")]
    EmptyHistory,

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// What was written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    /// Title plus entries
    pub lines: usize,
    pub pages: usize,
}

/// Number of pages needed for `lines` lines
pub fn page_count(lines: usize) -> usize {
    lines.div_ceil(LINES_PER_PAGE).max(1)
}

/// Write `title` and `entries` to a PDF at `path`.
///
/// An empty history is refused before anything touches the filesystem.
pub fn export_history<S: AsRef<str>>(
    entries: &[S],
    title: &str,
    path: &Path,
) -> Result<ExportReport, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptyHistory);
    }

    let lines: Vec<String> = std::iter::once(title)
        .chain(entries.iter().map(AsRef::as_ref))
        .map(latin1_lossy)
        .collect();

    let (doc, first_page, first_layer) = PdfDocument::new(title, PAGE_WIDTH, PAGE_HEIGHT, "History");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("{:?}", e)))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (i, line) in lines.iter().enumerate() {
        let row = i % LINES_PER_PAGE;
        if i > 0 && row == 0 {
            let (page, page_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "History");
            layer = doc.get_page(page).get_layer(page_layer);
        }
        let y = PAGE_HEIGHT.0 - MARGIN_MM - LINE_PITCH_MM * row as f32;
        layer.use_text(line.as_str(), FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font);
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Pdf(format!("{:?}", e)))?;

    let report = ExportReport {
        path: path.to_path_buf(),
        lines: lines.len(),
        pages: page_count(lines.len()),
    };
    tracing::info!(path = %report.path.display(), lines = report.lines, pages = report.pages, "history exported");
    Ok(report)
}

/// The builtin PDF fonts only cover Latin-1; anything else becomes '?'
fn latin1_lossy(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}
