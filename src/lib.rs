//! Printable one-month-per-page PDF calendars.
//!
//! Each month is laid out as a uniform grid of eight rows by seven columns: the month's
//! title across the top, a row of weekday headers, then six weeks of days. Because the
//! grid never changes shape, every month of a year prints at exactly the same size, so
//! the pages can be dropped into another document's fixed layout.
//!
//! ```no_run
//! use pdf_calendar::{CalendarConfig, Generator};
//! use chrono::NaiveDate;
//!
//! let config = CalendarConfig {
//!     hues: vec![210.0],
//!     output_dir: "calendars".into(),
//!     ..CalendarConfig::default()
//! };
//! let generator = Generator::new(&config)?;
//! let files = generator.generate_year(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())?;
//! assert_eq!(files.len(), 12);
//! # Ok::<(), pdf_calendar::CalendarError>(())
//! ```
//!
//! Months can also be drawn onto any [surface::Surface], which is how the layout is
//! inspected without producing a PDF:
//!
//! ```
//! use pdf_calendar::surface::Recorder;
//! use pdf_calendar::*;
//! use chrono::Weekday;
//!
//! let month = MonthMatrix::new(2024, 1, Weekday::Mon)?;
//! let palette = Palette::from_hue(Hue::new(0.6)?);
//! let area = Rect::new(Pt(0.0), Pt(250.0), Pt(360.0), Pt(250.0));
//!
//! let mut recorder = Recorder::default();
//! draw_month(&mut recorder, area, &month, &palette, &CalendarStyle::default(), &DayNames::default(), false)?;
//! assert_eq!(recorder.texts()[0], "January 2024");
//! # Ok::<(), CalendarError>(())
//! ```

mod calendar;
pub use calendar::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod generator;
pub use generator::*;

mod info;
pub use info::*;

/// Splitting pages into margins and calendar grids
pub mod layout;

mod page;
pub use page::*;

/// Standard page sizes
pub mod pagesize;

mod palette;
pub use palette::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod style;
pub use style::*;

/// Things calendars can be drawn onto
pub mod surface;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
