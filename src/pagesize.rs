//! Page sizes for calendar output.
//!
//! Paper sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape. [`CALENDAR`] is the default, a small landscape card meant for
//! embedding into another document.
//!
//! # Example
//!
//! ```
//! use pdf_calendar::pagesize::{self, PageOrientation, A5};
//!
//! let landscape = A5.landscape();
//! assert!(landscape.0 > landscape.1);
//! assert_eq!(pagesize::by_name("a5"), Some(A5));
//! ```

use crate::error::CalendarError;
use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// 130mm x 90mm, landscape
pub const CALENDAR: PageSize = (Pt(130.0 * 72.0 / 25.4), Pt(90.0 * 72.0 / 25.4));

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(13.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

/// Look up a named page size, case-insensitively
pub fn by_name(name: &str) -> Option<PageSize> {
    let size = match name.to_ascii_lowercase().as_str() {
        "calendar" => CALENDAR,
        "letter" => LETTER,
        "half-letter" | "half_letter" => HALF_LETTER,
        "legal" => LEGAL,
        "tabloid" => TABLOID,
        "a3" => A3,
        "a4" => A4,
        "a5" => A5,
        "a6" => A6,
        _ => return None,
    };
    Some(size)
}

/// Reject page sizes that can't hold a layout: both dimensions must be finite and positive
pub fn validate(size: PageSize) -> Result<PageSize, CalendarError> {
    let (width, height) = size;
    if width.is_finite() && height.is_finite() && *width > 0.0 && *height > 0.0 {
        Ok(size)
    } else {
        Err(CalendarError::InvalidGeometry { width, height })
    }
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
