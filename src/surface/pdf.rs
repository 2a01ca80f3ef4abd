use super::{Align, PaintMode, Surface};
use crate::colour::Colour;
use crate::document::{Document, FontId};
use crate::font::{CellFont, Font, FontFamily};
use crate::info::Info;
use crate::page::Page;
use crate::rect::Rect;
use crate::units::Pt;
use crate::CalendarError;
use pdf_writer::{Content, Name, Str};
use std::io::Write;
use std::rc::Rc;

#[derive(Clone)]
struct ActiveFont {
    id: FontId,
    font: Rc<Font>,
    size: Pt,
}

/// Draws onto a single page of a fresh [Document]. Fonts are registered with the document
/// the first time they are selected.
pub struct PdfSurface {
    document: Document,
    page: Page,
    content: Content,
    families: Vec<FontFamily>,
    font: Option<ActiveFont>,
    saved: Vec<Option<ActiveFont>>,
}

impl PdfSurface {
    pub fn new(page: Page, families: Vec<FontFamily>) -> PdfSurface {
        PdfSurface {
            document: Document::default(),
            page,
            content: Content::new(),
            families,
            font: None,
            saved: Vec::new(),
        }
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// The area of the page inside its margins
    pub fn content_box(&self) -> Rect {
        self.page.content_box
    }

    /// Close the page and hand back the finished document
    pub fn into_document(self) -> Document {
        let PdfSurface {
            mut document,
            mut page,
            content,
            ..
        } = self;
        page.add_content(content);
        document.add_page(page);
        document
    }
}

impl Surface for PdfSurface {
    fn save_state(&mut self) {
        self.saved.push(self.font.clone());
        self.content.save_state();
    }

    fn restore_state(&mut self) {
        if let Some(font) = self.saved.pop() {
            self.font = font;
            self.content.restore_state();
        } else {
            log::warn!("drawing state restored more times than it was saved");
        }
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        match colour {
            Colour::RGB { r, g, b } => self.content.set_fill_rgb(r, g, b),
            Colour::Grey { g } => self.content.set_fill_gray(g),
        };
    }

    fn set_line_width(&mut self, width: Pt) {
        self.content.set_line_width(*width);
    }

    fn set_font(&mut self, font: &CellFont) -> Result<(), CalendarError> {
        let variant = self
            .families
            .iter()
            .find(|family| family.name.eq_ignore_ascii_case(&font.family))
            .map(|family| family.variant(font.bold).clone())
            .ok_or_else(|| CalendarError::UnknownFontFamily(font.family.clone()))?;

        let id = self.document.add_font(variant.clone());
        self.content
            .set_font(Name(format!("F{}", id.index()).as_bytes()), *font.size);
        self.font = Some(ActiveFont {
            id,
            font: variant,
            size: font.size,
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode) {
        self.content
            .rect(*rect.x, *rect.bottom(), *rect.width, *rect.height);
        match mode {
            PaintMode::Stroke => self.content.stroke(),
            PaintMode::FillAndStroke => self.content.fill_nonzero_and_stroke(),
        };
    }

    fn draw_string(&mut self, x: Pt, y: Pt, text: &str, align: Align) {
        let Some(active) = &self.font else {
            log::warn!("no font selected, skipping {text:?}");
            return;
        };
        let x = match align {
            Align::Left => x,
            Align::Centre => x - active.font.width_of_text(text, active.size) / 2.0,
        };
        let encoded = active.font.encode(text);
        log::trace!("F{} {text:?} at ({x}, {y})", active.id.index());

        self.content.begin_text();
        self.content.next_line(*x, *y);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    fn string_width(&self, text: &str) -> Pt {
        self.font
            .as_ref()
            .map(|active| active.font.width_of_text(text, active.size))
            .unwrap_or_default()
    }

    fn finish<W: Write>(self, w: W) -> Result<(), CalendarError> {
        self.into_document().write(w)
    }
}
