//! Background mode selection for the dashboard shell
//!
//! A stored preference picks the animated background. In `auto` mode the
//! variant follows the current WMO weather code at the user's location; the
//! code is fetched by the shell and passed in here. Only the web shell
//! consumes this module; no CLI command uses it.

use crate::constants::weather::{
    CLEAR_REASON, CONSTELLATION_MODE_STATUS, RAIN_CODES, RAIN_MODE_STATUS, RAIN_REASON,
    SNOW_CODES, SNOW_MODE_STATUS, SNOW_REASON,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored background preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    Snow,
    Rain,
    Constellation,
    #[default]
    Auto,
}

impl BackgroundMode {
    pub const ALL: [BackgroundMode; 4] = [
        BackgroundMode::Snow,
        BackgroundMode::Rain,
        BackgroundMode::Constellation,
        BackgroundMode::Auto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Snow => "snow",
            BackgroundMode::Rain => "rain",
            BackgroundMode::Constellation => "constellation",
            BackgroundMode::Auto => "auto",
        }
    }

    /// Exact-match parse of a stored value; anything else is `Auto`
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("snow") => BackgroundMode::Snow,
            Some("rain") => BackgroundMode::Rain,
            Some("constellation") => BackgroundMode::Constellation,
            _ => BackgroundMode::Auto,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            BackgroundMode::Snow => "Background: Snow",
            BackgroundMode::Rain => "Background: Rain",
            BackgroundMode::Constellation => "Background: Constellations",
            BackgroundMode::Auto => "Background: Auto",
        }
    }

    /// Mode selected when the auto option is clicked again
    pub fn next_in_cycle(&self) -> Self {
        match self {
            BackgroundMode::Auto => BackgroundMode::Constellation,
            BackgroundMode::Constellation => BackgroundMode::Snow,
            BackgroundMode::Snow => BackgroundMode::Rain,
            BackgroundMode::Rain => BackgroundMode::Auto,
        }
    }

    pub fn follows_weather(&self) -> bool {
        *self == BackgroundMode::Auto
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background actually rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherVariant {
    Snow,
    Rain,
    Constellation,
}

/// Rendered variant plus the status line shown next to the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundDecision {
    pub variant: WeatherVariant,
    pub status: &'static str,
}

/// Variant and reason for a WMO weather code
pub fn classify_weather_code(code: i32) -> BackgroundDecision {
    if SNOW_CODES.contains(&code) {
        BackgroundDecision {
            variant: WeatherVariant::Snow,
            status: SNOW_REASON,
        }
    } else if RAIN_CODES.contains(&code) {
        BackgroundDecision {
            variant: WeatherVariant::Rain,
            status: RAIN_REASON,
        }
    } else {
        BackgroundDecision {
            variant: WeatherVariant::Constellation,
            status: CLEAR_REASON,
        }
    }
}

/// Decide the background for a mode
///
/// `weather_code` is only consulted in `auto` mode; `None` there means the
/// lookup failed and yields constellations with an empty status.
pub fn select_variant(mode: BackgroundMode, weather_code: Option<i32>) -> BackgroundDecision {
    match mode {
        BackgroundMode::Snow => BackgroundDecision {
            variant: WeatherVariant::Snow,
            status: SNOW_MODE_STATUS,
        },
        BackgroundMode::Rain => BackgroundDecision {
            variant: WeatherVariant::Rain,
            status: RAIN_MODE_STATUS,
        },
        BackgroundMode::Constellation => BackgroundDecision {
            variant: WeatherVariant::Constellation,
            status: CONSTELLATION_MODE_STATUS,
        },
        BackgroundMode::Auto => match weather_code {
            Some(code) => classify_weather_code(code),
            None => BackgroundDecision {
                variant: WeatherVariant::Constellation,
                status: "",
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(BackgroundMode::normalize(Some("snow")), BackgroundMode::Snow);
        assert_eq!(BackgroundMode::normalize(Some("constellation")), BackgroundMode::Constellation);
        assert_eq!(BackgroundMode::normalize(Some("Snow")), BackgroundMode::Auto);
        assert_eq!(BackgroundMode::normalize(Some("stars")), BackgroundMode::Auto);
        assert_eq!(BackgroundMode::normalize(None), BackgroundMode::Auto);
    }

    #[test]
    fn test_weather_codes() {
        assert_eq!(classify_weather_code(73).variant, WeatherVariant::Snow);
        assert_eq!(classify_weather_code(73).status, "Snow detected in your area");
        assert_eq!(classify_weather_code(61).variant, WeatherVariant::Rain);
        assert_eq!(classify_weather_code(82).variant, WeatherVariant::Rain);
        assert_eq!(classify_weather_code(0).variant, WeatherVariant::Constellation);
        assert_eq!(classify_weather_code(0).status, "No precipitation right now");
        // Thunderstorm codes are not rain
        assert_eq!(classify_weather_code(95).variant, WeatherVariant::Constellation);
    }

    #[test]
    fn test_fixed_modes_ignore_weather() {
        let decision = select_variant(BackgroundMode::Rain, Some(73));
        assert_eq!(decision.variant, WeatherVariant::Rain);
        assert_eq!(decision.status, "Rain mode active");

        let decision = select_variant(BackgroundMode::Constellation, Some(61));
        assert_eq!(decision.variant, WeatherVariant::Constellation);
        assert_eq!(decision.status, "Constellations mode active");
    }

    #[test]
    fn test_auto_mode() {
        assert_eq!(
            select_variant(BackgroundMode::Auto, Some(86)).variant,
            WeatherVariant::Snow
        );
        let failed = select_variant(BackgroundMode::Auto, None);
        assert_eq!(failed.variant, WeatherVariant::Constellation);
        assert_eq!(failed.status, "");
    }

    #[test]
    fn test_cycle_visits_every_mode() {
        let mut mode = BackgroundMode::Auto;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = mode.next_in_cycle();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![
                BackgroundMode::Constellation,
                BackgroundMode::Snow,
                BackgroundMode::Rain,
                BackgroundMode::Auto
            ]
        );
    }
}
