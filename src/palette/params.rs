//! User-facing arrangement parameters and the choices offered for them.

use serde::{Deserialize, Serialize};

use crate::voxel::Color;
use super::season::Season;

/// Flower counts offered to the user. The generator accepts any count.
pub const FLOWER_COUNTS: [usize; 5] = [1, 5, 10, 15, 20];

/// Colors the user can toggle on and off.
pub const PICKER_COLORS: [Color; 10] = [
    Color::from_u32(0xFF6B6B), // soft red
    Color::from_u32(0x4ECDC4), // turquoise
    Color::from_u32(0x45B7D1), // sky blue
    Color::from_u32(0x96CEB4), // sage
    Color::from_u32(0xFFEEAD), // cream
    Color::from_u32(0xD4A5A5), // dusty rose
    Color::from_u32(0x9B59B6), // purple
    Color::from_u32(0x3498DB), // blue
    Color::from_u32(0xE67E22), // orange
    Color::from_u32(0x2ECC71), // green
];

/// The three inputs that drive a full arrangement rebuild.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementParams {
    pub season: Season,
    /// Ordered, user-toggleable. May be empty.
    pub selected_colors: Vec<Color>,
    pub num_flowers: usize,
}

impl Default for ArrangementParams {
    /// Spring with nothing selected yet, fifteen flowers.
    fn default() -> Self {
        Self {
            season: Season::Spring,
            selected_colors: Vec::new(),
            num_flowers: 15,
        }
    }
}

impl ArrangementParams {
    /// Switch season and replace the color selection with the season's preset.
    pub fn select_season(&mut self, season: Season) {
        self.season = season;
        self.selected_colors = season.preset().colors.to_vec();
    }

    /// Remove `color` if selected (every occurrence), otherwise append it.
    ///
    /// Returns whether the color is selected afterwards.
    pub fn toggle_color(&mut self, color: Color) -> bool {
        if self.selected_colors.contains(&color) {
            self.selected_colors.retain(|c| *c != color);
            false
        } else {
            self.selected_colors.push(color);
            true
        }
    }

    pub fn set_flower_count(&mut self, count: usize) {
        if !FLOWER_COUNTS.contains(&count) {
            log::debug!("Flower count {} is outside the offered choices", count);
        }
        self.num_flowers = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_colors() {
        let params = ArrangementParams::default();
        assert_eq!(params.season, Season::Spring);
        assert!(params.selected_colors.is_empty());
        assert_eq!(params.num_flowers, 15);
    }

    #[test]
    fn test_select_season_replaces_colors() {
        let mut params = ArrangementParams::default();
        params.toggle_color(PICKER_COLORS[0]);
        params.select_season(Season::Autumn);
        assert_eq!(params.season, Season::Autumn);
        assert_eq!(params.selected_colors, Season::Autumn.preset().colors.to_vec());
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut params = ArrangementParams::default();
        assert!(params.toggle_color(PICKER_COLORS[2]));
        assert!(params.toggle_color(PICKER_COLORS[5]));
        assert_eq!(params.selected_colors, vec![PICKER_COLORS[2], PICKER_COLORS[5]]);
        assert!(!params.toggle_color(PICKER_COLORS[2]));
        assert_eq!(params.selected_colors, vec![PICKER_COLORS[5]]);
    }

    #[test]
    fn test_toggle_removes_duplicates_from_preset() {
        let mut params = ArrangementParams::default();
        params.select_season(Season::Spring);
        let hot_pink = Season::Spring.preset().colors[0];
        assert!(!params.toggle_color(hot_pink));
        assert_eq!(params.selected_colors.len(), 3);
        assert!(!params.selected_colors.contains(&hot_pink));
    }

    #[test]
    fn test_any_flower_count_accepted() {
        let mut params = ArrangementParams::default();
        params.set_flower_count(7);
        assert_eq!(params.num_flowers, 7);
    }
}
