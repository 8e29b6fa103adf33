//! unitconv - an interactive unit converter
//!
//! Pick a category and two of its units, enter a value, get the converted
//! value. Successful conversions are kept in the session history, which can be
//! exported as a PDF. UI labels are translated on demand.
//!
//! ```ignore
//! use unitconv::prelude::*;
//!
//! let app = UnitConverterApp::new(Passthrough, Settings::default());
//! let mut session = Session::default();
//! let view = app.convert(&mut session, &ConversionRequest::new(1.0, "meters", "kilometers"), Category::Length);
//! assert!(view.is_converted());
//! ```

mod app;
mod labels;
mod session;

pub use app::{
    format_entry, CategoryView, ConversionRequest, ConvertView, ExportStatus, HistoryView, LabelView,
    Settings, UnitConverterApp,
};
pub use labels::Label;
pub use session::{History, Session};

pub use unitconv_core::{codes, Severity, UcError};
pub use unitconv_translate::{
    CachingTranslator, GoogleTranslator, Language, Localized, Passthrough, Translator, TranslatorConfig,
};
pub use unitconv_units::{convert, Category, ConversionOutcome, UnitName};

pub mod prelude {
    pub use crate::{
        Category, ConversionOutcome, ConversionRequest, ConvertView, ExportStatus, Label, Language,
        Passthrough, Session, Settings, Translator, UnitConverterApp,
    };
}
