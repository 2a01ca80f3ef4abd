use crate::document::FontId;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Content, Filter, Finish, Name, Pdf};

/// A single page of a document: its size, the area inside its margins, and the drawing
/// operations placed on it
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The page's content stream, uncompressed
    pub contents: Vec<u8>,
}

impl Page {
    /// Create a new page with the given size and optional margins. The margins determine
    /// the page's `content_box`.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect::new(Pt(0.0), height, width, height),
            content_box: Rect::from_corners(
                margins.left,
                margins.bottom,
                width - margins.right,
                height - margins.top,
            ),
            contents: Vec::new(),
        }
    }

    /// Append drawing operations to the page
    pub fn add_content(&mut self, content: Content) {
        self.contents.extend(content.finish());
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &[FontId],
        writer: &mut Pdf,
    ) {
        let id = refs.gen(RefType::Page(page_index));
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        if let Some(tree) = refs.get(RefType::PageTree) {
            page.parent(tree);
        }

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in fonts.iter() {
            let index = font.index();
            if let Some(font_ref) = refs.get(RefType::Font(index)) {
                resource_fonts.pair(Name(format!("F{index}").as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &self.contents,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);
    }
}
