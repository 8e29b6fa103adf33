//! UI label catalog; English is the source text for every label

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Title,
    SelectCategory,
    From,
    EnterValue,
    FromUnit,
    To,
    ToUnit,
    Convert,
    Result,
    ConversionFailed,
    ConversionHistory,
    SaveAsPdf,
    PdfSaved,
    PdfFailed,
    NoHistory,
    HowToUse,
    HowToUseBody,
    Footer,
}

impl Label {
    pub fn english(self) -> &'static str {
        match self {
            Label::Title => "📏 Smart Unit Converter",
            Label::SelectCategory => "Select Category",
            Label::From => "From",
            Label::EnterValue => "Enter Value",
            Label::FromUnit => "From Unit",
            Label::To => "To",
            Label::ToUnit => "To Unit",
            Label::Convert => "Convert",
            Label::Result => "Result",
            Label::ConversionFailed => "Sorry, couldn't perform the conversion. Please check your units.",
            Label::ConversionHistory => "Conversion History",
            Label::SaveAsPdf => "Save as PDF",
            Label::PdfSaved => "PDF saved successfully!",
            Label::PdfFailed => "Couldn't save the PDF. Please try again.",
            Label::NoHistory => "No conversion history to save.",
            Label::HowToUse => "ℹ️ How to use",
            Label::HowToUseBody => "\
1. Select a conversion category
2. Enter the value you want to convert
3. Choose the units you want to convert from and to
4. Convert to see the result

The converter supports units across length, weight, temperature, volume, time, and speed.",
            Label::Footer => "Made with ❤️ in Rust",
        }
    }

    pub fn all() -> impl Iterator<Item = Label> {
        Label::iter()
    }
}
