//! Geometry for calendar pages.
//!
//! [`Margins`] carve the usable area out of a page, and [`GridLayout`] subdivides that
//! area into the calendar's title bar, weekday headers, and six week rows.
//!
//! # Example
//!
//! ```
//! use chrono::Weekday;
//! use pdf_calendar::layout::{GridLayout, Margins};
//! use pdf_calendar::{pagesize, MonthMatrix, Page};
//!
//! let page = Page::new(pagesize::CALENDAR, Some(Margins::proportional(pagesize::CALENDAR, 50.0)));
//! let february = MonthMatrix::new(2026, 2, Weekday::Mon).expect("valid month");
//! let grid = GridLayout::new(page.content_box, &february).expect("page has area");
//!
//! // february 2026 starts on a sunday and only spans 5 weeks, but the grid always has 6
//! assert_eq!(grid.weeks.len(), 6);
//! assert_eq!(grid.weeks[0][6].day, 1);
//! assert!(grid.weeks[5].iter().all(|slot| slot.day == 0));
//! ```

mod grid;
mod margins;

pub use grid::*;
pub use margins::*;
