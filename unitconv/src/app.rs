//! Interaction handlers
//!
//! Each handler takes the caller's `Session` and returns a view: plain data
//! with every user-facing string already localized.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use unitconv_core::UcError;
use unitconv_export::{export_history, ExportError, ExportReport, DEFAULT_EXPORT_FILE};
use unitconv_translate::{localize, Localized, Translator};
use unitconv_units::{convert_units, Category, ConversionOutcome, UnitName};

use crate::labels::Label;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub export_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self { export_path: PathBuf::from(DEFAULT_EXPORT_FILE) }
    }
}

/// One conversion as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self { value, from_unit: from_unit.into(), to_unit: to_unit.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConvertView {
    Converted {
        heading: Localized,
        value: f64,
        entry: String,
    },
    Failed {
        message: Localized,
        error: UcError,
    },
}

impl ConvertView {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConvertView::Converted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub heading: Localized,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExportStatus {
    Saved {
        message: Localized,
        report: ExportReport,
    },
    Warning {
        message: Localized,
        error: UcError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelView {
    pub label: Label,
    pub text: Localized,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub units: Vec<UnitName>,
}

/// `"{value} {from} = {result:.4} {to}"`, value printed as a float literal
pub fn format_entry(value: f64, from: UnitName, result: f64, to: UnitName) -> String {
    format!("{:?} {} = {:.4} {}", value, from, result, to)
}

pub struct UnitConverterApp<T: Translator> {
    translator: T,
    settings: Settings,
}

impl<T: Translator> UnitConverterApp<T> {
    pub fn new(translator: T, settings: Settings) -> Self {
        Self { translator, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn text(&self, session: &Session, label: Label) -> Localized {
        localize(&self.translator, label.english(), session.language())
    }

    /// Convert and, on success, append the entry to the session history.
    ///
    /// Both units must belong to `category`; anything else is refused
    /// without consulting the converter.
    pub fn convert(&self, session: &mut Session, request: &ConversionRequest, category: Category) -> ConvertView {
        let units = (
            category.unit_named(&request.from_unit),
            category.unit_named(&request.to_unit),
        );
        let (from, to) = match units {
            (Some(from), Some(to)) => (from, to),
            (None, _) => return self.failed(session, UcError::invalid_unit(&request.from_unit, category.into())),
            (_, None) => return self.failed(session, UcError::invalid_unit(&request.to_unit, category.into())),
        };

        match convert_units(request.value, from, to) {
            ConversionOutcome::Success(value) => {
                let entry = format_entry(request.value, from, value, to);
                tracing::info!(%entry, "converted");
                session.record(entry.clone());
                ConvertView::Converted {
                    heading: self.text(session, Label::Result),
                    value,
                    entry,
                }
            }
            ConversionOutcome::Failure => {
                let message = self.text(session, Label::ConversionFailed);
                let error = UcError::conversion_failed(message.text.clone());
                ConvertView::Failed { message, error }
            }
        }
    }

    fn failed(&self, session: &Session, error: UcError) -> ConvertView {
        tracing::debug!(code = %error.code, "conversion refused");
        ConvertView::Failed {
            message: self.text(session, Label::ConversionFailed),
            error,
        }
    }

    pub fn history(&self, session: &Session) -> HistoryView {
        HistoryView {
            heading: self.text(session, Label::ConversionHistory),
            entries: session.history().entries().to_vec(),
        }
    }

    /// Write the session history to the configured path. Never fatal.
    pub fn export_pdf(&self, session: &Session) -> ExportStatus {
        let history = session.history();
        if history.is_empty() {
            let message = self.text(session, Label::NoHistory);
            let error = UcError::no_history(message.text.clone());
            return ExportStatus::Warning { message, error };
        }

        let title = self.text(session, Label::ConversionHistory);
        match export_history(history.entries(), &title.text, &self.settings.export_path) {
            Ok(report) => ExportStatus::Saved {
                message: self.text(session, Label::PdfSaved),
                report,
            },
            Err(ExportError::EmptyHistory) => {
                let message = self.text(session, Label::NoHistory);
                let error = UcError::no_history(message.text.clone());
                ExportStatus::Warning { message, error }
            }
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                ExportStatus::Warning {
                    message: self.text(session, Label::PdfFailed),
                    error: UcError::export_failure(e.to_string()),
                }
            }
        }
    }

    /// Every label in the session language
    pub fn labels(&self, session: &Session) -> Vec<LabelView> {
        Label::all()
            .map(|label| LabelView { label, text: self.text(session, label) })
            .collect()
    }

    pub fn categories(&self) -> Vec<CategoryView> {
        Category::all()
            .map(|category| CategoryView { category, units: category.units() })
            .collect()
    }
}
