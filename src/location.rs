//! Latitude-band estimate of peak sun hours.
//!
//! A coarse climate-zone lookup, not an irradiance model: the caller hands
//! in a latitude (from whatever positioning source it has) and gets back a
//! PSH figure for the matching band.

use std::str::FromStr;

/// Climate band by absolute latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateZone {
    /// |lat| < 10°.
    Tropical,
    /// 10° <= |lat| < 30°.
    Subtropical,
    /// 30° <= |lat| < 50°.
    Temperate,
    /// |lat| >= 50°.
    Northern,
}

impl ClimateZone {
    /// Typical peak sun hours for the zone.
    pub fn peak_sun_hours(self) -> f64 {
        match self {
            Self::Tropical => 5.5,
            Self::Subtropical => 5.0,
            Self::Temperate => 4.0,
            Self::Northern => 3.0,
        }
    }

    /// Zone name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Subtropical => "subtropical",
            Self::Temperate => "temperate",
            Self::Northern => "northern",
        }
    }

    /// All zones, in increasing |latitude| order.
    pub const ALL: &[Self] = &[
        Self::Tropical,
        Self::Subtropical,
        Self::Temperate,
        Self::Northern,
    ];
}

impl FromStr for ClimateZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tropical" => Ok(Self::Tropical),
            "subtropical" => Ok(Self::Subtropical),
            "temperate" => Ok(Self::Temperate),
            "northern" => Ok(Self::Northern),
            other => Err(format!(
                "unknown climate zone \"{other}\", expected one of: {}",
                Self::ALL
                    .iter()
                    .map(|z| z.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Maps a latitude to its climate zone.
///
/// Returns `None` for non-finite latitudes or values outside [-90, 90];
/// the caller should surface that as a notice and keep its configured PSH.
pub fn zone_for_latitude(latitude_deg: f64) -> Option<ClimateZone> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return None;
    }
    let abs = latitude_deg.abs();
    Some(if abs < 10.0 {
        ClimateZone::Tropical
    } else if abs < 30.0 {
        ClimateZone::Subtropical
    } else if abs < 50.0 {
        ClimateZone::Temperate
    } else {
        ClimateZone::Northern
    })
}

/// Estimates peak sun hours for a latitude.
pub fn peak_sun_hours_for_latitude(latitude_deg: f64) -> Option<f64> {
    zone_for_latitude(latitude_deg).map(ClimateZone::peak_sun_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_values() {
        assert_eq!(peak_sun_hours_for_latitude(0.0), Some(5.5));
        assert_eq!(peak_sun_hours_for_latitude(-5.0), Some(5.5));
        assert_eq!(peak_sun_hours_for_latitude(20.0), Some(5.0));
        assert_eq!(peak_sun_hours_for_latitude(-45.0), Some(4.0));
        assert_eq!(peak_sun_hours_for_latitude(60.0), Some(3.0));
        assert_eq!(peak_sun_hours_for_latitude(-90.0), Some(3.0));
    }

    #[test]
    fn band_edges_fall_to_the_higher_latitude_side() {
        // Strict `<` comparisons: 10, 30, and 50 land in the next band out.
        assert_eq!(zone_for_latitude(10.0), Some(ClimateZone::Subtropical));
        assert_eq!(zone_for_latitude(30.0), Some(ClimateZone::Temperate));
        assert_eq!(zone_for_latitude(50.0), Some(ClimateZone::Northern));
    }

    #[test]
    fn hemisphere_does_not_matter() {
        assert_eq!(zone_for_latitude(35.0), zone_for_latitude(-35.0));
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        assert_eq!(zone_for_latitude(91.0), None);
        assert_eq!(zone_for_latitude(-120.0), None);
        assert_eq!(zone_for_latitude(f64::NAN), None);
        assert_eq!(zone_for_latitude(f64::INFINITY), None);
    }

    #[test]
    fn zone_names_round_trip() {
        for zone in ClimateZone::ALL {
            assert_eq!(zone.name().parse::<ClimateZone>().ok(), Some(*zone));
        }
        assert!("polar".parse::<ClimateZone>().is_err());
    }
}
