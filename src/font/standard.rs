//! Metrics for the standard PDF fonts. These fonts are never embedded; every PDF reader
//! ships them, so all that's needed to lay text out is the advance width of each glyph.
//! Widths are in thousandths of an em, indexed from `' '` (32) to `'~'` (126).

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the standard PDF fonts this crate knows the metrics of
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// The PostScript name of the font, as written to the PDF `BaseFont` entry
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Advance width of a WinAnsi-encoded byte, in thousandths of an em
    pub fn advance(&self, byte: u8) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
            StandardFont::Courier | StandardFont::CourierBold => return 600,
        };
        match byte {
            32..=126 => table[(byte - 32) as usize],
            // accented latin-1 letters are close enough to the average lowercase width
            _ => 556,
        }
    }
}

/// Encode text as WinAnsi bytes. Characters outside of printable ASCII and Latin-1 are
/// replaced with `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            cp @ (32..=126 | 160..=255) => cp as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_indexed_from_space() {
        assert_eq!(StandardFont::Helvetica.advance(b' '), 278);
        assert_eq!(StandardFont::Helvetica.advance(b'0'), 556);
        assert_eq!(StandardFont::HelveticaBold.advance(b'W'), 944);
        assert_eq!(StandardFont::HelveticaBold.advance(b'~'), 584);
        assert_eq!(StandardFont::Courier.advance(b'i'), 600);
    }

    #[test]
    fn encodes_latin_1_and_replaces_the_rest() {
        assert_eq!(encode_win_ansi("Mai"), b"Mai".to_vec());
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("月"), b"?".to_vec());
    }
}
