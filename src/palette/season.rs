//! Seasons and their preset palettes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;
use crate::generation::FlowerType;
use crate::voxel::Color;

/// Season selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Palette and suggestions offered when a season is picked.
#[derive(Clone, Copy, Debug)]
pub struct SeasonPreset {
    pub display_name: &'static str,
    /// Pre-selected flower colors. May repeat an entry, which weights it when sampling.
    pub colors: &'static [Color],
    /// Types the season is meant to feature.
    ///
    /// Not consulted by the composer; type sampling is season-independent.
    /// Whether seasons should restrict types is an open product question.
    pub suggested_types: &'static [FlowerType],
}

static SPRING_COLORS: [Color; 5] = [
    Color::from_u32(0xFF69B4),
    Color::from_u32(0xFFB6C1),
    Color::from_u32(0xFFC0CB),
    Color::from_u32(0xFFE4E1),
    Color::from_u32(0xFF69B4),
];

static SUMMER_COLORS: [Color; 5] = [
    Color::from_u32(0xFF4500),
    Color::from_u32(0xFF8C00),
    Color::from_u32(0xFFA500),
    Color::from_u32(0xFFD700),
    Color::from_u32(0xFF6347),
];

static AUTUMN_COLORS: [Color; 5] = [
    Color::from_u32(0x8B4513),
    Color::from_u32(0xA0522D),
    Color::from_u32(0xD2691E),
    Color::from_u32(0xCD853F),
    Color::from_u32(0xDEB887),
];

static WINTER_COLORS: [Color; 5] = [
    Color::from_u32(0xFFFFFF),
    Color::from_u32(0xF0F8FF),
    Color::from_u32(0xE6E6FA),
    Color::from_u32(0xD8BFD8),
    Color::from_u32(0xDDA0DD),
];

static ALL_TYPES: [FlowerType; 3] = [FlowerType::Rose, FlowerType::Daisy, FlowerType::Tulip];
static NO_TULIPS: [FlowerType; 2] = [FlowerType::Rose, FlowerType::Daisy];

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn preset(&self) -> SeasonPreset {
        match self {
            Season::Spring => SeasonPreset {
                display_name: "Spring",
                colors: &SPRING_COLORS,
                suggested_types: &ALL_TYPES,
            },
            Season::Summer => SeasonPreset {
                display_name: "Summer",
                colors: &SUMMER_COLORS,
                suggested_types: &NO_TULIPS,
            },
            Season::Autumn => SeasonPreset {
                display_name: "Autumn",
                colors: &AUTUMN_COLORS,
                suggested_types: &NO_TULIPS,
            },
            Season::Winter => SeasonPreset {
                display_name: "Winter",
                colors: &WINTER_COLORS,
                suggested_types: &NO_TULIPS,
            },
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Season::ALL
            .into_iter()
            .find(|season| season.name() == wanted)
            .ok_or_else(|| Error::InvalidSeason(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("WINTER".parse::<Season>().unwrap(), Season::Winter);
        assert!(matches!("monsoon".parse::<Season>(), Err(Error::InvalidSeason(_))));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for season in Season::ALL {
            assert_eq!(season.to_string().parse::<Season>().unwrap(), season);
        }
    }

    #[test]
    fn test_every_preset_has_five_colors() {
        for season in Season::ALL {
            assert_eq!(season.preset().colors.len(), 5);
            assert!(!season.preset().suggested_types.is_empty());
        }
    }

    #[test]
    fn test_spring_keeps_duplicate_pink() {
        let colors = Season::Spring.preset().colors;
        assert_eq!(colors[0], colors[4]);
    }

    #[test]
    fn test_only_spring_suggests_tulips() {
        for season in Season::ALL {
            let has_tulip = season.preset().suggested_types.contains(&FlowerType::Tulip);
            assert_eq!(has_tulip, season == Season::Spring);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Season::Autumn).unwrap(), "\"autumn\"");
    }
}
