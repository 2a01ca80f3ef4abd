//! Fonts, font families, and the per-cell font settings used by the renderer.
//!
//! A [Font] is either one of the standard PDF fonts (which every reader provides, so they
//! are never embedded) or a TrueType font loaded from disk and embedded in each document.
//! Fonts are grouped into [FontFamily]s of a regular and a bold variant; cells then refer
//! to a family by name through a [CellFont].

mod standard;
mod truetype;

pub use standard::StandardFont;
pub use truetype::TrueTypeFont;

use crate::refs::{ObjectReferences, RefType};
use crate::surface::Align;
use crate::units::Pt;
use crate::CalendarError;
use pdf_writer::{Name, Pdf};
use std::path::Path;
use std::rc::Rc;

/// A font that can be measured and drawn with
#[derive(Debug)]
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// Load a TrueType or OpenType font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, CalendarError> {
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    pub fn name(&self) -> String {
        match self {
            Font::Standard(font) => font.base_font().to_string(),
            Font::TrueType(font) => font.name(),
        }
    }

    /// Thousandths of an em for standard fonts, the font's own units for TrueType fonts
    fn units_per_em(&self) -> f32 {
        match self {
            Font::Standard(_) => 1000.0,
            Font::TrueType(font) => font.units_per_em() as f32,
        }
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: f32 = match self {
            Font::Standard(font) => standard::encode_win_ansi(text)
                .into_iter()
                .map(|byte| font.advance(byte) as f32)
                .sum(),
            Font::TrueType(font) => text.chars().map(|ch| font.advance(ch) as f32).sum(),
        };
        size * (units / self.units_per_em())
    }

    /// Encode text into the byte string shown by a `Tj` operator for this font
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(_) => standard::encode_win_ansi(text),
            Font::TrueType(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => {
                let id = refs.gen(RefType::Font(font_index));
                writer
                    .type1_font(id)
                    .base_font(Name(font.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::TrueType(font) => font.write(refs, font_index, writer),
        }
    }
}

/// A regular and a bold font, known by a family name
#[derive(Debug, Clone)]
pub struct FontFamily {
    pub name: String,
    pub regular: Rc<Font>,
    pub bold: Rc<Font>,
}

impl FontFamily {
    pub fn helvetica() -> FontFamily {
        FontFamily {
            name: "Helvetica".to_string(),
            regular: Rc::new(Font::Standard(StandardFont::Helvetica)),
            bold: Rc::new(Font::Standard(StandardFont::HelveticaBold)),
        }
    }

    pub fn courier() -> FontFamily {
        FontFamily {
            name: "Courier".to_string(),
            regular: Rc::new(Font::Standard(StandardFont::Courier)),
            bold: Rc::new(Font::Standard(StandardFont::CourierBold)),
        }
    }

    /// Load a family from font files on disk. Without a separate bold file, the regular
    /// font is used for bold text as well.
    pub fn load<S: ToString>(
        name: S,
        regular: &Path,
        bold: Option<&Path>,
    ) -> Result<FontFamily, CalendarError> {
        let regular = Rc::new(Font::load(std::fs::read(regular)?)?);
        let bold = match bold {
            Some(path) => Rc::new(Font::load(std::fs::read(path)?)?),
            None => regular.clone(),
        };
        Ok(FontFamily {
            name: name.to_string(),
            regular,
            bold,
        })
    }

    /// The variant to use for bold or regular text
    pub fn variant(&self, bold: bool) -> &Rc<Font> {
        if bold {
            &self.bold
        } else {
            &self.regular
        }
    }
}

/// How text in a cell should be set
#[derive(Debug, Clone, PartialEq)]
pub struct CellFont {
    /// Name of a [FontFamily] known to the surface
    pub family: String,
    pub size: Pt,
    /// Distance the baseline is dropped below the cell's vertical centre
    pub padding: Pt,
    pub bold: bool,
    pub align: Align,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_standard_fonts() {
        let family = FontFamily::helvetica();
        // "31" is two 556-unit digits
        let width = family.variant(false).width_of_text("31", Pt(10.0));
        assert!((*width - 11.12).abs() < 1e-4);

        let bold = family.variant(true).width_of_text("Mi", Pt(1000.0));
        assert!((*bold - (833.0 + 278.0)).abs() < 1e-2);
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(
            Font::load(vec![0u8; 16]),
            Err(CalendarError::FaceParsing(_))
        ));
    }
}
