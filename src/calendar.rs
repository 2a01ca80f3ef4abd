//! Calendar math: which day of the month falls in which cell of a week-by-week grid.

use crate::layout::COLUMNS;
use crate::CalendarError;
use chrono::{Datelike, Month, NaiveDate, Weekday};

/// A month laid out week by week. Each week has one entry per column starting at the
/// configured first weekday; entries are the day of the month, or 0 where the cell falls
/// outside of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMatrix {
    pub year: i32,
    /// 1 = January
    pub month: u32,
    pub first_weekday: Weekday,
    pub weeks: Vec<[u32; COLUMNS]>,
}

impl MonthMatrix {
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> Result<MonthMatrix, CalendarError> {
        let invalid = || CalendarError::InvalidMonth { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let days_in_month = next.signed_duration_since(first).num_days() as u32;

        let leading = (COLUMNS as u32 + first.weekday().num_days_from_monday()
            - first_weekday.num_days_from_monday()) as usize
            % COLUMNS;
        let mut cells: Vec<u32> = vec![0; leading];
        cells.extend(1..=days_in_month);
        cells.resize(cells.len().div_ceil(COLUMNS) * COLUMNS, 0);

        let weeks = cells
            .chunks_exact(COLUMNS)
            .map(|week| {
                let mut days = [0u32; COLUMNS];
                days.copy_from_slice(week);
                days
            })
            .collect();

        Ok(MonthMatrix {
            year,
            month,
            first_weekday,
            weeks,
        })
    }

    /// The day of the month in the given week and column, or 0 if there is none
    pub fn day(&self, week: usize, column: usize) -> u32 {
        self.weeks
            .get(week)
            .and_then(|days| days.get(column))
            .copied()
            .unwrap_or(0)
    }

    /// The month's English name
    pub fn name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .map(|month| month.name())
            .unwrap_or("")
    }

    /// The month's name followed by the year, e.g. "January 2024"
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    /// The (week, column) a day of the month falls in
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 {
            return None;
        }
        self.weeks.iter().enumerate().find_map(|(week, days)| {
            days.iter()
                .position(|&d| d == day)
                .map(|column| (week, column))
        })
    }

    /// Number of days in the month
    pub fn len(&self) -> u32 {
        self.weeks.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The labels drawn above each column. Names are stored Monday first and handed out
/// starting at whichever day the week starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNames([String; COLUMNS]);

impl Default for DayNames {
    fn default() -> Self {
        DayNames(["M", "T", "W", "T", "F", "S", "S"].map(String::from))
    }
}

impl DayNames {
    /// Build a list of day names, Monday first. There must be exactly seven.
    pub fn new<S: ToString>(names: &[S]) -> Result<DayNames, CalendarError> {
        let names: Vec<String> = names.iter().map(ToString::to_string).collect();
        let names: [String; COLUMNS] = names
            .try_into()
            .map_err(|names: Vec<String>| CalendarError::DayNameCount(names.len()))?;
        Ok(DayNames(names))
    }

    /// The name of a weekday
    pub fn name(&self, day: Weekday) -> &str {
        &self.0[day.num_days_from_monday() as usize]
    }

    /// The seven names in column order for weeks starting on `first_weekday`
    pub fn columns(&self, first_weekday: Weekday) -> [&str; COLUMNS] {
        let mut day = first_weekday;
        std::array::from_fn(|_| {
            let name = self.name(day);
            day = day.succ();
            name
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_2024_starts_on_a_monday() {
        let month = MonthMatrix::new(2024, 1, Weekday::Mon).unwrap();
        assert_eq!(month.weeks[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(month.position_of(1), Some((0, 0)));
        assert_eq!(month.position_of(31), Some((4, 2)));
        assert_eq!(month.weeks.len(), 5);
        assert_eq!(month.title(), "January 2024");
    }

    #[test]
    fn sunday_start_shifts_the_columns() {
        let month = MonthMatrix::new(2024, 1, Weekday::Sun).unwrap();
        assert_eq!(month.weeks[0], [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn leap_february() {
        let month = MonthMatrix::new(2024, 2, Weekday::Mon).unwrap();
        assert_eq!(month.len(), 29);
        assert!(month.position_of(29).is_some());

        let month = MonthMatrix::new(2023, 2, Weekday::Mon).unwrap();
        assert_eq!(month.len(), 28);
        assert_eq!(month.position_of(29), None);
    }

    #[test]
    fn six_week_months() {
        // september 2024 starts on a sunday, so a monday-first grid needs six rows
        let month = MonthMatrix::new(2024, 9, Weekday::Mon).unwrap();
        assert_eq!(month.weeks.len(), 6);
        assert_eq!(month.weeks[0], [0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(month.weeks[5], [30, 0, 0, 0, 0, 0, 0]);
        assert_eq!(month.day(6, 0), 0);
    }

    #[test]
    fn december_wraps_into_the_next_year() {
        let month = MonthMatrix::new(2024, 12, Weekday::Mon).unwrap();
        assert_eq!(month.len(), 31);
        assert_eq!(month.name(), "December");
    }

    #[test]
    fn rejects_bad_months() {
        assert!(matches!(
            MonthMatrix::new(2024, 13, Weekday::Mon),
            Err(CalendarError::InvalidMonth { month: 13, .. })
        ));
    }

    #[test]
    fn day_names_rotate_with_the_first_weekday() {
        let names = DayNames::new(&["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]).unwrap();
        assert_eq!(names.columns(Weekday::Mon)[0], "Mo");
        assert_eq!(
            names.columns(Weekday::Sun),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
        assert!(matches!(
            DayNames::new(&["a", "b"]),
            Err(CalendarError::DayNameCount(2))
        ));
    }
}
