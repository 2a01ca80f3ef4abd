use crate::{
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    CalendarError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::{io::Write, rc::Rc};

/// Reference to a font registered with a [Document]
pub type FontId = Id<Rc<Font>>;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Rc<Font>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document. Fonts are shared by every page of the document; adding
    /// the same font twice returns the id it was first given.
    pub fn add_font(&mut self, font: Rc<Font>) -> FontId {
        if let Some((id, _)) = self.fonts.iter().find(|(_, f)| Rc::ptr_eq(f, &font)) {
            return id;
        }
        self.fonts.alloc(font)
    }

    /// Write the entire document to the writer. The whole document is rendered in memory
    /// first, then written in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), CalendarError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
        } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let font_ids: Vec<_> = fonts.iter().map(|(id, _)| id).collect();
        for (id, font) in fonts.iter() {
            font.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(CalendarError::PageMissing)?;
            page.write(&mut refs, page_index, &font_ids, &mut writer);
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice())?;
        w.flush().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFamily;
    use crate::pagesize;

    #[test]
    fn fonts_are_registered_once() {
        let family = FontFamily::helvetica();
        let mut doc = Document::default();
        let a = doc.add_font(family.regular.clone());
        let b = doc.add_font(family.bold.clone());
        let c = doc.add_font(family.regular.clone());
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(doc.fonts.len(), 2);
    }

    #[test]
    fn writes_a_pdf() {
        let mut doc = Document::default();
        doc.add_font(FontFamily::helvetica().regular);
        doc.add_page(Page::new(pagesize::A6, None));
        doc.set_info(Info::new().title("empty").clone());

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).expect("can write document");
        assert!(out.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/Count 1"));
    }
}
