//! Font sizing for calendar pages. Every size here is a fraction of the scale factor, so
//! a calendar looks the same on any page size.

use crate::font::CellFont;
use crate::surface::Align;
use crate::units::Pt;
use serde::Deserialize;

/// Size and baseline drop of one kind of label, relative to the scale factor
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    /// How far the baseline sits below the cell's vertical centre. Tuned by eye against
    /// the font's ascent and descent; there is no derivation behind the defaults.
    pub padding: f32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub align: Align,
}

impl TextStyle {
    pub fn font(&self, family: &str, scale_factor: Pt) -> CellFont {
        CellFont {
            family: family.to_string(),
            size: scale_factor * self.size,
            padding: scale_factor * self.padding,
            bold: self.bold,
            align: self.align,
        }
    }
}

/// How each kind of label on a calendar page is set
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarStyle {
    /// Name of the font family to set every label in
    pub family: String,
    pub title: TextStyle,
    pub header: TextStyle,
    pub day: TextStyle,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        CalendarStyle {
            family: "Helvetica".to_string(),
            title: TextStyle {
                size: 0.060,
                padding: 0.020,
                bold: true,
                align: Align::Centre,
            },
            header: TextStyle {
                size: 0.050,
                padding: 0.016,
                bold: true,
                align: Align::Centre,
            },
            day: TextStyle {
                size: 0.090,
                padding: 0.029,
                bold: true,
                align: Align::Centre,
            },
        }
    }
}

/// The fonts for one page, sized for its scale factor
#[derive(Debug, Clone, PartialEq)]
pub struct PageFonts {
    pub title: CellFont,
    pub header: CellFont,
    pub day: CellFont,
}

impl CalendarStyle {
    pub fn fonts(&self, scale_factor: Pt) -> PageFonts {
        PageFonts {
            title: self.title.font(&self.family, scale_factor),
            header: self.header.font(&self.family, scale_factor),
            day: self.day.font(&self.family, scale_factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fonts_scale_with_the_page() {
        let style = CalendarStyle::default();
        let small = style.fonts(Pt(100.0));
        let large = style.fonts(Pt(300.0));

        assert!((*large.day.size - *small.day.size * 3.0).abs() < 1e-3);
        assert!((*large.title.padding - *small.title.padding * 3.0).abs() < 1e-3);
        assert!(small.day.size > small.title.size);
        assert!(small.title.size > small.header.size);
        assert!(small.day.bold);
        assert_eq!(small.header.family, "Helvetica");
    }
}
