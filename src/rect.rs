use crate::colour::Colour;
use crate::units::*;

/// A rectangle anchored at its top-left corner. Coordinates are page coordinates, so the
/// origin is the bottom-left of the page and `y` is the _top_ edge of the rectangle; the
/// rectangle extends down to `y - height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x: Pt,
    /// The y-coordinate of the top edge
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Rect {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its lower-left and upper-right corners
    pub fn from_corners(x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Rect {
        Rect {
            x: x1,
            y: y2,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    pub fn left(&self) -> Pt {
        self.x
    }

    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    pub fn top(&self) -> Pt {
        self.y
    }

    pub fn bottom(&self) -> Pt {
        self.y - self.height
    }

    /// The length of the shorter side
    pub fn shortest_side(&self) -> Pt {
        self.width.min(self.height)
    }

    /// Whether both dimensions are finite and strictly positive
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && *self.width > 0.0 && *self.height > 0.0
    }

    /// Shrink the rectangle by `amount` on all four sides
    pub fn inset(&self, amount: Pt) -> Rect {
        Rect {
            x: self.x + amount,
            y: self.y - amount,
            width: self.width - amount * 2.0,
            height: self.height - amount * 2.0,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.left().into(),
            y1: r.bottom().into(),
            x2: r.right().into(),
            y2: r.top().into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        (*r).into()
    }
}

/// A rectangle to paint, with the colour to fill it with and the colour to draw any label in.
/// When `background` is [None] only the border is drawn; when `foreground` is [None], labels
/// keep whatever fill colour the surface already has.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub bounds: Rect,
    pub background: Option<Colour>,
    pub foreground: Option<Colour>,
}

impl Cell {
    pub fn new(bounds: Rect, background: Colour, foreground: Colour) -> Cell {
        Cell {
            bounds,
            background: Some(background),
            foreground: Some(foreground),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_round_trip() {
        let r = Rect::from_corners(Pt(10.0), Pt(20.0), Pt(110.0), Pt(70.0));
        assert_eq!(r, Rect::new(Pt(10.0), Pt(70.0), Pt(100.0), Pt(50.0)));
        assert_eq!(r.bottom(), Pt(20.0));
        assert_eq!(r.right(), Pt(110.0));

        let pdf: pdf_writer::Rect = r.into();
        assert_eq!((pdf.x1, pdf.y1, pdf.x2, pdf.y2), (10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn inset_shrinks_symmetrically() {
        let r = Rect::new(Pt(0.0), Pt(100.0), Pt(200.0), Pt(100.0)).inset(Pt(1.0));
        assert_eq!(r, Rect::new(Pt(1.0), Pt(99.0), Pt(198.0), Pt(98.0)));
    }

    #[test]
    fn degenerate_rects_have_no_area() {
        assert!(!Rect::new(Pt(0.0), Pt(0.0), Pt(0.0), Pt(10.0)).has_area());
        assert!(!Rect::new(Pt(0.0), Pt(0.0), Pt(10.0), Pt(-1.0)).has_area());
        assert!(!Rect::new(Pt(0.0), Pt(0.0), Pt(f32::NAN), Pt(1.0)).has_area());
        assert!(Rect::new(Pt(0.0), Pt(0.0), Pt(1.0), Pt(1.0)).has_area());
    }
}
