//! Turns a configuration into a year of one-page PDF calendars.

use crate::calendar::{DayNames, MonthMatrix};
use crate::config::CalendarConfig;
use crate::document::Document;
use crate::font::FontFamily;
use crate::info::Info;
use crate::layout::{GridLayout, Margins};
use crate::page::Page;
use crate::pagesize::{self, PageSize};
use crate::palette::{HueSchedule, Palette};
use crate::rect::{Cell, Rect};
use crate::render::{render_cell, Label, RenderOptions};
use crate::style::CalendarStyle;
use crate::surface::{PdfSurface, StateGuard, Surface};
use crate::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Margins take this fraction (1/n) of each page dimension on both sides
pub const MARGIN_DIVISOR: f32 = 50.0;

/// Draw one month into `area`: a title row, a row of weekday headers and six weeks of days.
/// Every cell is drawn inside its own saved state, so nothing set for one cell reaches the
/// next. Returns the layout that was drawn.
pub fn draw_month<S: Surface>(
    surface: &mut S,
    area: Rect,
    month: &MonthMatrix,
    palette: &Palette,
    style: &CalendarStyle,
    day_names: &DayNames,
    ordinals: bool,
) -> Result<GridLayout, CalendarError> {
    let layout = GridLayout::new(area, month)?;
    let fonts = style.fonts(layout.scale_factor);
    let options = RenderOptions {
        scale_factor: layout.scale_factor,
        ordinals,
    };
    log::debug!(
        "laying out {} in {area:?}, scale factor {}",
        month.title(),
        layout.scale_factor
    );

    surface.set_line_width(layout.line_width);

    let title = month.title();
    let title_cell = Cell::new(layout.title, palette.title_background, palette.title_text);
    render_cell(
        &mut *StateGuard::new(surface),
        Label::Text(&title),
        &title_cell,
        &fonts.title,
        &options,
    )?;

    let names = day_names.columns(month.first_weekday);
    for (bounds, name) in layout.headers.iter().zip(names) {
        let cell = Cell::new(*bounds, palette.cell_background, palette.cell_text);
        render_cell(
            &mut *StateGuard::new(surface),
            Label::Text(name),
            &cell,
            &fonts.header,
            &options,
        )?;
    }

    for week in layout.weeks.iter() {
        for slot in week.iter() {
            let cell = Cell::new(slot.bounds, palette.cell_background, palette.cell_text);
            render_cell(
                &mut *StateGuard::new(surface),
                Label::Day(slot.day),
                &cell,
                &fonts.day,
                &options,
            )?;
        }
    }
    log::debug!("drew {} cells for {title}", layout.cell_count());

    Ok(layout)
}

/// A validated calendar configuration, ready to render months
#[derive(Debug, Clone)]
pub struct Generator {
    page_size: PageSize,
    hues: HueSchedule,
    first_weekday: Weekday,
    day_names: DayNames,
    style: CalendarStyle,
    families: Vec<FontFamily>,
    ordinals: bool,
    output_dir: PathBuf,
    file_prefix: String,
}

impl Generator {
    /// Check every setting and load every font, so that a bad configuration fails before
    /// any file is written
    pub fn new(config: &CalendarConfig) -> Result<Generator, CalendarError> {
        let page_size = pagesize::validate(config.page.size())?;
        let hues = config.hue_schedule()?;
        if config.ordinals {
            return Err(CalendarError::OrdinalsNotImplemented);
        }
        let day_names = DayNames::new(&config.day_names)?;

        let mut families = vec![FontFamily::helvetica(), FontFamily::courier()];
        for font in config.fonts.iter() {
            log::debug!("loading font family {} from {}", font.name, font.regular.display());
            families.push(FontFamily::load(
                &font.name,
                &font.regular,
                font.bold.as_deref(),
            )?);
        }
        if !families
            .iter()
            .any(|family| family.name.eq_ignore_ascii_case(&config.style.family))
        {
            return Err(CalendarError::UnknownFontFamily(config.style.family.clone()));
        }

        Ok(Generator {
            page_size,
            hues,
            first_weekday: config.first_weekday,
            day_names,
            style: config.style.clone(),
            families,
            ordinals: config.ordinals,
            output_dir: config.output_dir.clone(),
            file_prefix: config.file_prefix.clone(),
        })
    }

    /// Where the calendar for a month is written
    pub fn path_for(&self, year: i32, month: u32) -> PathBuf {
        self.output_dir
            .join(format!("{}-{year}-{month}.pdf", self.file_prefix))
    }

    pub fn palette_for(&self, month: u32) -> Palette {
        Palette::from_hue(self.hues.hue_for(month))
    }

    /// Render one month as a single-page document, without touching the filesystem
    pub fn render_month(&self, year: i32, month: u32) -> Result<Document, CalendarError> {
        let matrix = MonthMatrix::new(year, month, self.first_weekday)?;
        let palette = self.palette_for(month);

        let margins = Margins::proportional(self.page_size, MARGIN_DIVISOR);
        let mut surface = PdfSurface::new(Page::new(self.page_size, Some(margins)), self.families.clone());

        let mut info = Info::new();
        info.title(matrix.title()).subject("Calendar");
        surface.set_info(info);

        let area = surface.content_box();
        draw_month(
            &mut surface,
            area,
            &matrix,
            &palette,
            &self.style,
            &self.day_names,
            self.ordinals,
        )?;
        Ok(surface.into_document())
    }

    /// Write a calendar for every month of the anchor date's year, returning the paths
    /// written in month order. Stops at the first failure; months already written are
    /// left in place.
    pub fn generate_year(&self, anchor: NaiveDate) -> Result<Vec<PathBuf>, CalendarError> {
        let year = anchor.year();
        std::fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(12);
        for month in 1..=12 {
            let document = self.render_month(year, month)?;
            let path = self.path_for(year, month);
            persist(document, &path)?;
            log::info!("wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// Write next to `path` first and move into place once complete, so a failed write never
/// leaves a truncated calendar behind
fn persist(document: Document, path: &Path) -> Result<(), CalendarError> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let result = File::create(&partial)
        .map_err(CalendarError::from)
        .and_then(|file| document.write(BufWriter::new(file)))
        .and_then(|_| std::fs::rename(&partial, path).map_err(CalendarError::from));

    if result.is_err() && partial.exists() {
        if let Err(e) = std::fs::remove_file(&partial) {
            log::warn!("failed to remove {}: {e}", partial.display());
        }
    }
    result
}
