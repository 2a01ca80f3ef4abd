use anyhow::{anyhow, Context, Result};
use chrono::{Duration, Local, NaiveDate, Weekday};
use clap::Parser;
use flexi_logger::{FileSpec, Logger};
use pdf_calendar::pagesize::{self, PageOrientation};
use pdf_calendar::{CalendarConfig, FontConfig, Generator, PageConfig, Unit};
use std::path::PathBuf;

/// Family name given to fonts loaded with `--font`
const CUSTOM_FAMILY: &str = "custom";

/// How far ahead of today the calendar year is picked when no year or date is given
const DEFAULT_LOOKAHEAD_DAYS: i64 = 180;

#[derive(Parser, Debug)]
#[command(author, version, about = "Write a year of one-page PDF calendars, one file per month")]
struct Args {
    /// TOML file to read settings from; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Year to generate
    #[arg(short, long, conflicts_with = "date")]
    year: Option<i32>,

    /// Generate the year containing this date (YYYY-MM-DD). Defaults to 180 days from today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Page width, in --unit
    #[arg(long)]
    width: Option<f32>,

    /// Page height, in --unit
    #[arg(long)]
    height: Option<f32>,

    /// Unit of --width and --height: pt, mm or in
    #[arg(long, value_parser = parse_unit)]
    unit: Option<Unit>,

    /// Named page size (calendar, letter, half-letter, legal, tabloid, a3-a6)
    #[arg(long, conflicts_with_all = ["width", "height", "unit"])]
    page: Option<String>,

    /// Turn the page so its long side is horizontal
    #[arg(long)]
    landscape: bool,

    /// Hue for the cells: give once for every month or twelve times, one per month.
    /// Fractions in [0, 1] or degrees in (1, 360]
    #[arg(long = "hue")]
    hues: Vec<f32>,

    /// First day of the week (mon, tue, ..., sun)
    #[arg(long)]
    week_start: Option<Weekday>,

    /// Comma-separated column headers, Monday first
    #[arg(long, value_delimiter = ',')]
    day_names: Vec<String>,

    /// TrueType font to set the calendar in
    #[arg(long)]
    font: Option<PathBuf>,

    /// Bold TrueType font to go with --font
    #[arg(long, requires = "font")]
    bold_font: Option<PathBuf>,

    /// Directory to write calendars into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name prefix; files are named <prefix>-<year>-<month>.pdf
    #[arg(long)]
    prefix: Option<String>,

    /// Suffix day numbers with ordinals (not implemented yet)
    #[arg(long)]
    ordinals: bool,

    #[arg(long = "log-file", help = "path to log file")]
    log_file: Option<PathBuf>,
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    match s.to_ascii_lowercase().as_str() {
        "pt" => Ok(Unit::Pt),
        "mm" => Ok(Unit::Mm),
        "in" => Ok(Unit::In),
        other => Err(format!("unknown unit {other:?}, expected pt, mm or in")),
    }
}

impl Args {
    /// Layer the command line over the settings file (or the defaults)
    fn calendar_config(&self) -> Result<CalendarConfig> {
        let mut config = match &self.config {
            Some(path) => CalendarConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => CalendarConfig::default(),
        };

        if let Some(name) = &self.page {
            let size = pagesize::by_name(name).ok_or_else(|| anyhow!("unknown page size {name:?}"))?;
            config.page = PageConfig::from_size(size);
        }
        if let Some(width) = self.width {
            config.page.width = width;
        }
        if let Some(height) = self.height {
            config.page.height = height;
        }
        if let Some(unit) = self.unit {
            config.page.unit = unit;
        }
        if self.landscape {
            config.page = PageConfig::from_size(config.page.size().landscape());
        }

        if !self.hues.is_empty() {
            config.hues = self.hues.clone();
        }
        if let Some(first_weekday) = self.week_start {
            config.first_weekday = first_weekday;
        }
        if !self.day_names.is_empty() {
            config.day_names = self.day_names.clone();
        }
        if let Some(regular) = &self.font {
            config.fonts.push(FontConfig {
                name: CUSTOM_FAMILY.to_string(),
                regular: regular.clone(),
                bold: self.bold_font.clone(),
            });
            config.style.family = CUSTOM_FAMILY.to_string();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }
        config.ordinals |= self.ordinals;

        Ok(config)
    }

    fn anchor(&self) -> Result<NaiveDate> {
        if let Some(date) = self.date {
            return Ok(date);
        }
        if let Some(year) = self.year {
            return NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| anyhow!("year {year} is out of range"));
        }
        Ok(Local::now().date_naive() + Duration::days(DEFAULT_LOOKAHEAD_DAYS))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;
    if let Some(log_file) = args.log_file.clone() {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }
    let _logger = logger.start()?;

    let config = args.calendar_config()?;
    let anchor = args.anchor()?;
    log::debug!("generating the calendar for {anchor} with {config:?}");

    let generator = Generator::new(&config).context("invalid calendar settings")?;
    let written = generator
        .generate_year(anchor)
        .with_context(|| format!("failed to write calendars into {}", config.output_dir.display()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
