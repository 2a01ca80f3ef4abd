use super::{Align, PaintMode, Surface};
use crate::colour::Colour;
use crate::font::{CellFont, FontFamily};
use crate::rect::Rect;
use crate::units::Pt;
use crate::CalendarError;
use std::io::Write;

/// One call made against a [Recorder]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SaveState,
    RestoreState,
    FillColour(Colour),
    LineWidth(Pt),
    Font(CellFont),
    Rect(Rect, PaintMode),
    Text {
        x: Pt,
        y: Pt,
        text: String,
        align: Align,
    },
}

/// A surface that records every operation instead of drawing. Text is measured with the
/// families it is given (Helvetica and Courier by default), so layout decisions that
/// depend on string widths come out the same as on a [`PdfSurface`](super::PdfSurface).
#[derive(Debug, Clone)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
    families: Vec<FontFamily>,
    font: Option<CellFont>,
    saved: Vec<Option<CellFont>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Recorder::with_families(vec![FontFamily::helvetica(), FontFamily::courier()])
    }
}

impl Recorder {
    pub fn with_families(families: Vec<FontFamily>) -> Recorder {
        Recorder {
            ops: Vec::new(),
            families,
            font: None,
            saved: Vec::new(),
        }
    }

    /// How many saved states are waiting to be restored
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Every string drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every rectangle drawn, in order
    pub fn rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn family(&self, name: &str) -> Option<&FontFamily> {
        self.families.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl Surface for Recorder {
    fn save_state(&mut self) {
        self.saved.push(self.font.clone());
        self.ops.push(DrawOp::SaveState);
    }

    fn restore_state(&mut self) {
        if let Some(font) = self.saved.pop() {
            self.font = font;
        }
        self.ops.push(DrawOp::RestoreState);
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.ops.push(DrawOp::FillColour(colour));
    }

    fn set_line_width(&mut self, width: Pt) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_font(&mut self, font: &CellFont) -> Result<(), CalendarError> {
        if self.family(&font.family).is_none() {
            return Err(CalendarError::UnknownFontFamily(font.family.clone()));
        }
        self.font = Some(font.clone());
        self.ops.push(DrawOp::Font(font.clone()));
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode) {
        self.ops.push(DrawOp::Rect(rect, mode));
    }

    fn draw_string(&mut self, x: Pt, y: Pt, text: &str, align: Align) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            align,
        });
    }

    fn string_width(&self, text: &str) -> Pt {
        self.font
            .as_ref()
            .and_then(|font| {
                self.family(&font.family)
                    .map(|family| family.variant(font.bold).width_of_text(text, font.size))
            })
            .unwrap_or_default()
    }

    /// Writes one line per recorded operation
    fn finish<W: Write>(self, mut w: W) -> Result<(), CalendarError> {
        for op in self.ops.iter() {
            writeln!(w, "{op:?}")?;
        }
        w.flush().map_err(Into::into)
    }
}
