use crate::refs::{ObjectReferences, RefType};
use crate::CalendarError;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;

/// A parsed TrueType / OpenType font. The whole font file is embedded into every document
/// that uses it, so large fonts will dramatically increase the size of the generated PDFs.
pub struct TrueTypeFont {
    face: OwnedFace,
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("name", &self.name())
            .finish()
    }
}

impl TrueTypeFont {
    /// Parse a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, CalendarError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TrueTypeFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// The full name of the font, or `"Unnamed"` if the font doesn't carry one
    pub fn name(&self) -> String {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
            .unwrap_or_else(|| "Unnamed".to_string())
    }

    /// The PostScript name of the font, if it carries one
    pub fn postscript_name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
            .filter(|name| !name.is_empty())
    }

    /// Name written to `BaseFont` and `FontName`: the PostScript name, or `F<index>`
    fn base_font(&self, font_index: usize) -> String {
        self.postscript_name()
            .unwrap_or_else(|| format!("F{font_index}"))
    }

    pub fn units_per_em(&self) -> u16 {
        self.face().units_per_em()
    }

    /// The glyph used to draw `ch`, falling back to the replacement character and then
    /// to the `.notdef` glyph
    pub fn glyph_id(&self, ch: char) -> u16 {
        self.face()
            .glyph_index(ch)
            .or_else(|| self.face().glyph_index('\u{FFFD}'))
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    /// Horizontal advance of `ch` in font units
    pub fn advance(&self, ch: char) -> u16 {
        self.face()
            .glyph_hor_advance(GlyphId(self.glyph_id(ch)))
            .unwrap_or_default()
    }

    /// Encode text as big-endian glyph ids, to be shown with an `Identity-H` encoding
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .flat_map(|ch| self.glyph_id(ch).to_be_bytes())
            .collect()
    }

    /// Map of every glyph reachable from a unicode codepoint back to that codepoint
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };
        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                        map.entry(gid.0).or_insert(ch);
                    }
                }
            });
        }
        map
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let base_font = self.base_font(font_index);
        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = 1000.0 / self.units_per_em() as f32;

        let base_font = self.base_font(font_index);
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(1000.0);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        // one run of consecutive widths per unbroken range of glyph ids
        let mut widths = cid_font.widths();
        let mut run_start: Option<u16> = None;
        let mut run: Vec<f32> = Vec::new();
        for gid in self.glyph_chars().into_keys() {
            let width = self
                .face()
                .glyph_hor_advance(GlyphId(gid))
                .unwrap_or_default() as f32
                * scaling;
            match run_start {
                Some(start) if start as usize + run.len() == gid as usize => run.push(width),
                _ => {
                    if let Some(start) = run_start {
                        widths.consecutive(start, run.drain(..));
                    }
                    run_start = Some(gid);
                    run.push(width);
                }
            }
        }
        if let Some(start) = run_start {
            widths.consecutive(start, run);
        }
        widths.finish();

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let data = self.face.as_slice();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            data,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(data_id, compressed.as_slice())
            .filter(Filter::FlateDecode)
            .pair(Name(b"Length1"), data.len() as i32);

        let face = self.face();
        let scaling = 1000.0 / self.units_per_em() as f32;
        let bbox = face.global_bounding_box();

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags |= FontFlags::FIXED_PITCH;
        }
        if face.is_italic() {
            flags |= FontFlags::ITALIC;
        }

        let base_font = self.base_font(font_index);
        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(0.0);
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(face.ascender() as f32 * scaling),
        );
        // TODO: derive the stem width from the OS/2 weight class instead of a fixed guess
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let glyphs: Vec<(u16, char)> = self.glyph_chars().into_iter().collect();
        for block in glyphs.chunks(100) {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            map.push_str("endbfchar\n");
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}
