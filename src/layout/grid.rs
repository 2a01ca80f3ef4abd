use crate::calendar::MonthMatrix;
use crate::rect::Rect;
use crate::units::Pt;
use crate::CalendarError;

/// Number of day columns in a week
pub const COLUMNS: usize = 7;
/// Number of week rows reserved for every month, whether it needs them or not
pub const WEEK_ROWS: usize = 6;
/// Title row + weekday header row + week rows
pub const LAYOUT_ROWS: usize = WEEK_ROWS + 2;
/// Border stroke width as a fraction of the scale factor
pub const LINE_WIDTH_RATIO: f32 = 0.0025;

/// Where one day of the month goes. `day` is 0 for slots with no date in the month.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DaySlot {
    pub bounds: Rect,
    pub day: u32,
}

/// The rectangles making up one month's calendar page
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Length of the shorter side of the area the grid was laid out in; fonts and padding
    /// are sized relative to this
    pub scale_factor: Pt,
    /// Width to stroke cell borders with
    pub line_width: Pt,
    /// The month title, spanning all columns of the top row
    pub title: Rect,
    /// The weekday headers, in column order
    pub headers: [Rect; COLUMNS],
    /// Always [WEEK_ROWS] rows, top to bottom
    pub weeks: Vec<[DaySlot; COLUMNS]>,
}

impl GridLayout {
    /// Lay a month out in `area` (margins already removed). The area is inset by the border
    /// line width on every side so strokes on the outermost cells aren't clipped, then split
    /// into a uniform grid of [LAYOUT_ROWS] × [COLUMNS] cells.
    pub fn new(area: Rect, month: &MonthMatrix) -> Result<GridLayout, CalendarError> {
        if !area.has_area() {
            return Err(CalendarError::InvalidGeometry {
                width: area.width,
                height: area.height,
            });
        }

        let scale_factor = area.shortest_side();
        let line_width = scale_factor * LINE_WIDTH_RATIO;
        let area = area.inset(line_width);

        let cell_width = area.width / COLUMNS as f32;
        let cell_height = area.height / LAYOUT_ROWS as f32;
        let cell = |row: usize, column: usize| {
            Rect::new(
                area.x + cell_width * column as f32,
                area.y - cell_height * row as f32,
                cell_width,
                cell_height,
            )
        };

        let title = Rect::new(area.x, area.y, cell_width * COLUMNS as f32, cell_height);
        let headers: [Rect; COLUMNS] = std::array::from_fn(|column| cell(1, column));
        let weeks = (0..WEEK_ROWS)
            .map(|week| {
                std::array::from_fn(|column| DaySlot {
                    bounds: cell(week + 2, column),
                    day: month.day(week, column),
                })
            })
            .collect();

        Ok(GridLayout {
            scale_factor,
            line_width,
            title,
            headers,
            weeks,
        })
    }

    /// Total number of grid cells the layout occupies, counting the title as the
    /// [COLUMNS] cells it spans
    pub fn cell_count(&self) -> usize {
        COLUMNS + self.headers.len() + self.weeks.iter().map(|week| week.len()).sum::<usize>()
    }
}
