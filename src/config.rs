//! Everything that can be configured about a year of calendars, loadable from TOML.
//!
//! ```
//! use pdf_calendar::CalendarConfig;
//! use chrono::Weekday;
//!
//! let config = CalendarConfig::from_toml(r#"
//!     hues = [200]
//!     first_weekday = "sun"
//!     output_dir = "calendars"
//!
//!     [page]
//!     width = 6
//!     height = 4
//!     unit = "in"
//! "#).expect("valid config");
//!
//! assert_eq!(config.first_weekday, Weekday::Sun);
//! assert_eq!(config.hues, vec![200.0]);
//! assert_eq!(config.file_prefix, "cal");
//! ```

use crate::pagesize::PageSize;
use crate::palette::{spread_hues, HueSchedule};
use crate::style::CalendarStyle;
use crate::units::{In, Mm, Pt};
use crate::CalendarError;
use chrono::Weekday;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The unit page dimensions are given in
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pt,
    #[default]
    Mm,
    In,
}

impl Unit {
    pub fn to_points(&self, value: f32) -> Pt {
        match self {
            Unit::Pt => Pt(value),
            Unit::Mm => Mm(value).into(),
            Unit::In => In(value).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub unit: Unit,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            width: 130.0,
            height: 90.0,
            unit: Unit::Mm,
        }
    }
}

impl PageConfig {
    pub fn size(&self) -> PageSize {
        (self.unit.to_points(self.width), self.unit.to_points(self.height))
    }

    pub fn from_size(size: PageSize) -> PageConfig {
        PageConfig {
            width: *size.0,
            height: *size.1,
            unit: Unit::Pt,
        }
    }
}

/// A TrueType font family to load from disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    pub name: String,
    pub regular: PathBuf,
    pub bold: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub page: PageConfig,
    /// One hue for every month, or twelve hues, one per month. Fractions in [0, 1] or
    /// degrees in (1, 360].
    pub hues: Vec<f32>,
    pub first_weekday: Weekday,
    /// Column header labels, Monday first
    pub day_names: Vec<String>,
    pub style: CalendarStyle,
    /// Font families in addition to the built-in Helvetica and Courier
    pub fonts: Vec<FontConfig>,
    /// Suffix day numbers with ordinals. Not implemented; enabling it is an error.
    pub ordinals: bool,
    pub output_dir: PathBuf,
    /// Files are named `<file_prefix>-<year>-<month>.pdf`
    pub file_prefix: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            page: PageConfig::default(),
            // green (120°) round to pink (330°)
            hues: spread_hues(120.0, 330.0),
            first_weekday: Weekday::Mon,
            day_names: ["M", "T", "W", "T", "F", "S", "S"]
                .map(String::from)
                .to_vec(),
            style: CalendarStyle::default(),
            fonts: Vec::new(),
            ordinals: false,
            output_dir: PathBuf::from("."),
            file_prefix: "cal".to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn from_toml(source: &str) -> Result<CalendarConfig, CalendarError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<CalendarConfig, CalendarError> {
        let source = std::fs::read_to_string(path)?;
        CalendarConfig::from_toml(&source)
    }

    /// The hue schedule these settings describe
    pub fn hue_schedule(&self) -> Result<HueSchedule, CalendarError> {
        HueSchedule::from_values(&self.hues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn defaults_match_the_classic_calendar() {
        let config = CalendarConfig::default();
        let (width, height) = config.page.size();
        assert!((*width - *pagesize::CALENDAR.0).abs() < 1e-3);
        assert!((*height - *pagesize::CALENDAR.1).abs() < 1e-3);
        assert_eq!(config.hues, spread_hues(120.0, 330.0));
        assert!((config.hues[0] - 120.0).abs() < 1e-3);
        assert!((config.hues[11] - 330.0).abs() < 1e-3);
        assert!(matches!(config.hue_schedule(), Ok(HueSchedule::PerMonth(_))));
        assert_eq!(config.first_weekday, Weekday::Mon);
    }

    #[test]
    fn empty_toml_is_the_default() {
        assert_eq!(CalendarConfig::from_toml("").unwrap(), CalendarConfig::default());
    }

    #[test]
    fn partial_styles_fill_in_the_rest() {
        let config = CalendarConfig::from_toml(
            r#"
            [style]
            family = "Courier"

            [style.title]
            size = 0.07
            padding = 0.02
            align = "left"
            "#,
        )
        .unwrap();
        assert_eq!(config.style.family, "Courier");
        assert_eq!(config.style.title.align, crate::surface::Align::Left);
        assert!(!config.style.title.bold);
        assert_eq!(config.style.day, CalendarStyle::default().day);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            CalendarConfig::from_toml("colour = 3"),
            Err(CalendarError::Config(_))
        ));
    }

    #[test]
    fn fonts_are_listed_by_family() {
        let config = CalendarConfig::from_toml(
            r#"
            [[fonts]]
            name = "Fira"
            regular = "fonts/FiraSans-Regular.ttf"
            bold = "fonts/FiraSans-Bold.ttf"
            "#,
        )
        .unwrap();
        assert_eq!(config.fonts[0].name, "Fira");
        assert_eq!(config.fonts[0].bold, Some(PathBuf::from("fonts/FiraSans-Bold.ttf")));
    }
}
