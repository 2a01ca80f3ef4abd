//! Per-month colour schemes derived from a single hue.

use crate::colour::Colour;
use crate::CalendarError;

/// Lightness of cell backgrounds and title text
pub const LIGHT: f32 = 0.90;
/// Lightness of cell text and title backgrounds
pub const DARK: f32 = 0.15;

/// A hue, normalized to a fraction of the colour wheel in [0, 1]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Hue(f32);

impl Hue {
    /// Accept either a fraction in [0, 1] or degrees in (1, 360]; degrees are divided by 360
    pub fn new(value: f32) -> Result<Hue, CalendarError> {
        if !value.is_finite() || !(0.0..=360.0).contains(&value) {
            return Err(CalendarError::HueRange(value));
        }
        if value > 1.0 {
            Ok(Hue(value / 360.0))
        } else {
            Ok(Hue(value))
        }
    }

    pub fn fraction(&self) -> f32 {
        self.0
    }

    pub fn degrees(&self) -> f32 {
        self.0 * 360.0
    }
}

/// The hue for each month: either one hue shared by the whole year or one per month
#[derive(Debug, Clone, PartialEq)]
pub enum HueSchedule {
    Shared(Hue),
    PerMonth([Hue; 12]),
}

impl HueSchedule {
    /// Build a schedule from raw hue values, which must number either 1 or 12
    pub fn from_values(values: &[f32]) -> Result<HueSchedule, CalendarError> {
        let hues = values
            .iter()
            .map(|&value| Hue::new(value))
            .collect::<Result<Vec<Hue>, CalendarError>>()?;

        match hues.len() {
            1 => Ok(HueSchedule::Shared(hues[0])),
            12 => {
                let mut months = [hues[0]; 12];
                months.copy_from_slice(&hues);
                Ok(HueSchedule::PerMonth(months))
            }
            n => Err(CalendarError::HueCount(n)),
        }
    }

    /// The hue for a month, 1 = January. Months past either end of the year are clamped,
    /// so 0 reads as January and 13 as December.
    pub fn hue_for(&self, month: u32) -> Hue {
        match self {
            HueSchedule::Shared(hue) => *hue,
            HueSchedule::PerMonth(hues) => hues[(month.clamp(1, 12) - 1) as usize],
        }
    }
}

/// Twelve hue values, one per month, evenly spread from `start` to `end` inclusive
pub fn spread_hues(start: f32, end: f32) -> Vec<f32> {
    let step = (end - start) / 11.0;
    (0..12).map(|i| start + step * i as f32).collect()
}

/// The four colours a month is drawn with. Cell and title schemes are inversions of each
/// other: light cells with dark text, and a dark title bar with light text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub cell_background: Colour,
    pub cell_text: Colour,
    pub title_background: Colour,
    pub title_text: Colour,
}

impl Palette {
    pub fn from_hue(hue: Hue) -> Palette {
        let light = Colour::from_hls(hue.fraction(), LIGHT, 1.0);
        let dark = Colour::from_hls(hue.fraction(), DARK, 1.0);
        Palette {
            cell_background: light,
            cell_text: dark,
            title_background: dark,
            title_text: light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_normalize_to_fractions() {
        assert_eq!(Hue::new(180.0).unwrap(), Hue::new(0.5).unwrap());
        assert_eq!(Hue::new(360.0).unwrap().fraction(), 1.0);
        assert_eq!(Hue::new(1.0).unwrap().fraction(), 1.0);
        assert!(matches!(Hue::new(-0.1), Err(CalendarError::HueRange(_))));
        assert!(matches!(Hue::new(361.0), Err(CalendarError::HueRange(_))));
        assert!(Hue::new(f32::NAN).is_err());
    }

    #[test]
    fn only_one_or_twelve_hues() {
        assert!(matches!(
            HueSchedule::from_values(&[0.1, 0.2]),
            Err(CalendarError::HueCount(2))
        ));
        assert!(matches!(
            HueSchedule::from_values(&[]),
            Err(CalendarError::HueCount(0))
        ));
        assert!(HueSchedule::from_values(&[0.3]).is_ok());
        assert!(HueSchedule::from_values(&[0.3; 12]).is_ok());
    }

    #[test]
    fn shared_hue_gives_identical_palettes() {
        let schedule = HueSchedule::from_values(&[200.0]).unwrap();
        let january = Palette::from_hue(schedule.hue_for(1));
        for month in 2..=12 {
            assert_eq!(Palette::from_hue(schedule.hue_for(month)), january);
        }
    }

    #[test]
    fn per_month_hues_are_used_in_order() {
        let values: Vec<f32> = (0..12).map(|i| i as f32 / 12.0).collect();
        let schedule = HueSchedule::from_values(&values).unwrap();
        for month in 1..=12u32 {
            assert_eq!(schedule.hue_for(month).fraction(), values[month as usize - 1]);
        }
    }

    #[test]
    fn spread_covers_both_ends() {
        let schedule = HueSchedule::from_values(&spread_hues(120.0, 330.0)).unwrap();
        assert!((schedule.hue_for(1).degrees() - 120.0).abs() < 1e-3);
        assert!((schedule.hue_for(12).degrees() - 330.0).abs() < 1e-3);
    }

    #[test]
    fn months_outside_the_year_clamp_to_its_ends() {
        let schedule = HueSchedule::from_values(&spread_hues(120.0, 330.0)).unwrap();
        assert_eq!(schedule.hue_for(0), schedule.hue_for(1));
        assert_eq!(schedule.hue_for(13), schedule.hue_for(12));
        assert_eq!(schedule.hue_for(u32::MAX), schedule.hue_for(12));
        assert_ne!(schedule.hue_for(1), schedule.hue_for(12));

        let shared = HueSchedule::from_values(&[0.4]).unwrap();
        assert_eq!(shared.hue_for(0), shared.hue_for(13));
    }

    #[test]
    fn palettes_invert_lightness_around_one_hue() {
        for step in 0..20 {
            let hue = Hue::new(step as f32 / 20.0).unwrap();
            let palette = Palette::from_hue(hue);
            assert_eq!(palette.cell_background, palette.title_text);
            assert_eq!(palette.cell_text, palette.title_background);

            let (bg_hue, bg_light, _) = palette.cell_background.to_hls();
            let (fg_hue, fg_light, _) = palette.cell_text.to_hls();
            assert!((bg_light - LIGHT).abs() < 1e-3);
            assert!((fg_light - DARK).abs() < 1e-3);
            assert!(bg_light > fg_light);

            let hue_distance = (bg_hue - fg_hue).abs();
            assert!(hue_distance < 1e-3 || (1.0 - hue_distance) < 1e-3);
            let expected = hue.fraction().rem_euclid(1.0);
            let distance = (bg_hue - expected).abs();
            assert!(distance < 1e-3 || (1.0 - distance) < 1e-3);
        }
    }
}
