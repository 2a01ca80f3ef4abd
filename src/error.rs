use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// The configuration file could not be parsed
    Config(#[from] toml::de::Error),

    #[error("expected either 1 or 12 hues, got {0}")]
    /// Hues must be shared by all months or given once per month
    HueCount(usize),

    #[error("hue {0} is neither a fraction in [0, 1] nor degrees in (1, 360]")]
    HueRange(f32),

    #[error("dimensions must be positive, got {width} x {height}")]
    /// A page or layout area with no usable area
    InvalidGeometry { width: Pt, height: Pt },

    #[error("expected 7 day names, got {0}")]
    DayNameCount(usize),

    #[error("{year}-{month} is not a valid month")]
    InvalidMonth { year: i32, month: u32 },

    #[error("no font family named {0:?} is available")]
    UnknownFontFamily(String),

    #[error("ordinal day suffixes are not implemented")]
    OrdinalsNotImplemented,

    #[error("a page referenced by the document is missing")]
    PageMissing,
}
