//! Drawing a single calendar cell: a filled, bordered rectangle with an optional label.

use crate::font::CellFont;
use crate::rect::Cell;
use crate::surface::{Align, PaintMode, Surface};
use crate::units::Pt;
use crate::CalendarError;
use std::borrow::Cow;

/// Labels wider than this fraction of their cell are shrunk to fit
pub const MAX_LABEL_FILL: f32 = 0.92;
/// Inset of left-aligned labels, as a fraction of the scale factor
pub const LEFT_INSET_RATIO: f32 = 0.02;

/// What goes in a cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Label<'a> {
    /// A day of the month; 0 means the cell has no date
    Day(u32),
    Text(&'a str),
}

impl Label<'_> {
    pub fn is_blank(&self) -> bool {
        match self {
            Label::Day(day) => *day == 0,
            Label::Text(text) => text.is_empty(),
        }
    }

    fn text(&self, options: &RenderOptions) -> Result<Cow<'_, str>, CalendarError> {
        match self {
            Label::Day(_) if options.ordinals => Err(CalendarError::OrdinalsNotImplemented),
            Label::Day(day) => Ok(Cow::Owned(day.to_string())),
            Label::Text(text) => Ok(Cow::Borrowed(*text)),
        }
    }
}

/// Settings shared by every cell on a page
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderOptions {
    /// Length of the shorter side of the calendar area
    pub scale_factor: Pt,
    /// Suffix day numbers with ordinals ("1st", "2nd"). Not implemented yet: enabling it
    /// makes rendering any day fail.
    pub ordinals: bool,
}

/// Draw one cell. The rectangle is filled with the cell's background and stroked with the
/// surface's current line width; non-blank labels are then drawn in the cell's foreground
/// colour with their baseline `font.padding` below the cell's vertical centre.
///
/// This changes the surface's fill colour and font. Wrap the call in a
/// [`StateGuard`](crate::surface::StateGuard) to keep those changes from reaching the next cell.
pub fn render_cell<S: Surface>(
    surface: &mut S,
    label: Label<'_>,
    cell: &Cell,
    font: &CellFont,
    options: &RenderOptions,
) -> Result<(), CalendarError> {
    surface.set_font(font)?;

    let bounds = cell.bounds;
    let mode = match cell.background {
        Some(background) => {
            surface.set_fill_colour(background);
            PaintMode::FillAndStroke
        }
        None => PaintMode::Stroke,
    };
    surface.draw_rect(bounds, mode);

    if label.is_blank() {
        return Ok(());
    }
    let text = label.text(options)?;

    let width = surface.string_width(&text);
    let room = bounds.width * MAX_LABEL_FILL;
    if width > room {
        let mut shrunk = font.clone();
        shrunk.size = font.size * (*room / *width);
        surface.set_font(&shrunk)?;
    }

    if let Some(foreground) = cell.foreground {
        surface.set_fill_colour(foreground);
    }
    let x = match font.align {
        Align::Centre => bounds.x + bounds.width / 2.0,
        Align::Left => bounds.x + options.scale_factor * LEFT_INSET_RATIO,
    };
    let y = bounds.y - bounds.height / 2.0 - font.padding;
    surface.draw_string(x, y, &text, font.align);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::rect::Rect;
    use crate::surface::{DrawOp, Recorder, StateGuard};

    fn font(align: Align) -> CellFont {
        CellFont {
            family: "Helvetica".to_string(),
            size: Pt(12.0),
            padding: Pt(3.0),
            bold: true,
            align,
        }
    }

    fn cell() -> Cell {
        Cell::new(
            Rect::new(Pt(10.0), Pt(100.0), Pt(40.0), Pt(30.0)),
            Colour::RGB { r: 0.9, g: 0.9, b: 1.0 },
            Colour::RGB { r: 0.0, g: 0.0, b: 0.3 },
        )
    }

    fn options() -> RenderOptions {
        RenderOptions {
            scale_factor: Pt(200.0),
            ordinals: false,
        }
    }

    #[test]
    fn blank_days_only_paint_the_background() {
        let mut surface = Recorder::default();
        render_cell(&mut surface, Label::Day(0), &cell(), &font(Align::Centre), &options()).unwrap();

        assert!(surface.texts().is_empty());
        assert_eq!(surface.rects(), vec![cell().bounds]);
        assert!(surface
            .ops
            .contains(&DrawOp::Rect(cell().bounds, PaintMode::FillAndStroke)));
        assert!(surface
            .ops
            .contains(&DrawOp::FillColour(Colour::RGB { r: 0.9, g: 0.9, b: 1.0 })));
    }

    #[test]
    fn empty_text_is_blank_too() {
        let mut surface = Recorder::default();
        render_cell(&mut surface, Label::Text(""), &cell(), &font(Align::Centre), &options()).unwrap();
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn days_are_centred_below_the_middle() {
        let mut surface = Recorder::default();
        render_cell(&mut surface, Label::Day(17), &cell(), &font(Align::Centre), &options()).unwrap();

        let text = surface.ops.iter().find_map(|op| match op {
            DrawOp::Text { x, y, text, align } => Some((*x, *y, text.clone(), *align)),
            _ => None,
        });
        // centre x = 10 + 40 / 2, baseline = 100 - 30 / 2 - 3
        assert_eq!(text, Some((Pt(30.0), Pt(82.0), "17".to_string(), Align::Centre)));
        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::Text {
                x: Pt(30.0),
                y: Pt(82.0),
                text: "17".to_string(),
                align: Align::Centre
            })
        );
        assert!(surface
            .ops
            .contains(&DrawOp::FillColour(Colour::RGB { r: 0.0, g: 0.0, b: 0.3 })));
    }

    #[test]
    fn left_aligned_labels_are_inset() {
        let mut surface = Recorder::default();
        render_cell(&mut surface, Label::Text("Mo"), &cell(), &font(Align::Left), &options()).unwrap();
        match surface.ops.last() {
            Some(DrawOp::Text { x, align, .. }) => {
                assert_eq!(*x, Pt(14.0));
                assert_eq!(*align, Align::Left);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn wide_labels_shrink_to_fit() {
        let mut surface = Recorder::default();
        let title = "September 2024";
        render_cell(&mut surface, Label::Text(title), &cell(), &font(Align::Centre), &options()).unwrap();

        let sizes: Vec<Pt> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Font(font) => Some(font.size),
                _ => None,
            })
            .collect();
        assert_eq!(sizes.len(), 2);
        assert!(sizes[1] < sizes[0]);
        assert!(*surface.string_width(title) <= 40.0 * MAX_LABEL_FILL + 1e-3);
    }

    #[test]
    fn ordinals_fail_loudly() {
        let mut surface = Recorder::default();
        let options = RenderOptions {
            ordinals: true,
            ..options()
        };
        assert!(matches!(
            render_cell(&mut surface, Label::Day(3), &cell(), &font(Align::Centre), &options),
            Err(CalendarError::OrdinalsNotImplemented)
        ));
        assert!(surface.texts().is_empty());

        // blank cells never get as far as the label
        assert!(render_cell(&mut surface, Label::Day(0), &cell(), &font(Align::Centre), &options).is_ok());
    }

    #[test]
    fn guarded_cells_do_not_leak_state() {
        let mut surface = Recorder::default();
        let result = {
            let mut guarded = StateGuard::new(&mut surface);
            let options = RenderOptions {
                ordinals: true,
                ..options()
            };
            render_cell(&mut *guarded, Label::Day(9), &cell(), &font(Align::Centre), &options)
        };
        assert!(result.is_err());
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.ops.first(), Some(&DrawOp::SaveState));
        assert_eq!(surface.ops.last(), Some(&DrawOp::RestoreState));
        assert_eq!(surface.string_width("9"), Pt(0.0));
    }
}
