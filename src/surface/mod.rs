//! Drawing surfaces that calendar cells are rendered onto.
//!
//! A [Surface] is a small, stateful 2D drawing API: a fill colour, a line width, and a font
//! make up its drawing state, which can be pushed and popped with
//! [`save_state`](Surface::save_state) / [`restore_state`](Surface::restore_state).
//! [StateGuard] ties the pop to a scope so that no exit path can leak state.
//!
//! [PdfSurface] draws onto a page of a [`Document`](crate::Document); [Recorder] just
//! remembers what was asked of it.

mod pdf;
mod recorder;

pub use pdf::*;
pub use recorder::*;

use crate::colour::Colour;
use crate::font::CellFont;
use crate::rect::Rect;
use crate::units::Pt;
use crate::CalendarError;
use serde::Deserialize;
use std::io::Write;
use std::ops::{Deref, DerefMut};

/// Horizontal alignment of a string relative to its anchor point
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// The string starts at the anchor
    Left,
    /// The string is centred on the anchor
    #[default]
    Centre,
}

/// How a rectangle is painted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    FillAndStroke,
}

pub trait Surface {
    /// Push the current drawing state
    fn save_state(&mut self);

    /// Pop back to the most recently saved drawing state
    fn restore_state(&mut self);

    fn set_fill_colour(&mut self, colour: Colour);

    fn set_line_width(&mut self, width: Pt);

    /// Select the bold or regular variant of a font family at the given size
    fn set_font(&mut self, font: &CellFont) -> Result<(), CalendarError>;

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode);

    /// Draw a single line of text with its baseline at `y`, in the current font and fill colour
    fn draw_string(&mut self, x: Pt, y: Pt, text: &str, align: Align);

    /// The width `text` would take up in the current font
    fn string_width(&self, text: &str) -> Pt;

    /// Finalize whatever has been drawn and write it out
    fn finish<W: Write>(self, w: W) -> Result<(), CalendarError>
    where
        Self: Sized;
}

/// Saves a surface's drawing state when created and restores it when dropped, so every
/// change made through the guard is undone however the scope is left.
///
/// ```
/// use pdf_calendar::surface::{Recorder, StateGuard, Surface, DrawOp};
/// use pdf_calendar::colours;
///
/// let mut surface = Recorder::default();
/// {
///     let mut cell = StateGuard::new(&mut surface);
///     cell.set_fill_colour(colours::WHITE);
/// }
/// assert_eq!(surface.ops.last(), Some(&DrawOp::RestoreState));
/// assert_eq!(surface.depth(), 0);
/// ```
pub struct StateGuard<'s, S: Surface> {
    surface: &'s mut S,
}

impl<'s, S: Surface> StateGuard<'s, S> {
    pub fn new(surface: &'s mut S) -> StateGuard<'s, S> {
        surface.save_state();
        StateGuard { surface }
    }
}

impl<S: Surface> Deref for StateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface> DerefMut for StateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface> Drop for StateGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}
