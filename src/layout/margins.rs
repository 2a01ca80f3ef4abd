use crate::pagesize::PageSize;
use crate::units::Pt;

/// Margins around the edge of a page. They are applied to [`Page`](crate::Page)s to
/// determine the `content_box`, which is the area the calendar grid is laid out in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Margins that are a fixed fraction of the page: the left and right margins are
    /// `width / divisor` and the top and bottom margins are `height / divisor`
    pub fn proportional(size: PageSize, divisor: f32) -> Margins {
        let (width, height) = size;
        Margins::symmetric(height / divisor, width / divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_margins_follow_each_dimension() {
        let m = Margins::proportional((Pt(500.0), Pt(250.0)), 50.0);
        assert_eq!(m, Margins::trbl(Pt(5.0), Pt(10.0), Pt(5.0), Pt(10.0)));
    }
}
