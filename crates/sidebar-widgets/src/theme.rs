//! Visual configuration for model cards.

use serde::{Deserialize, Serialize};
use sidebar_core::Color;

/// Colors and metrics for [`crate::ModelCard`].
///
/// Every field has a default, so a theme file only needs the values it
/// overrides:
///
/// ```
/// use sidebar_widgets::CardTheme;
///
/// let theme = CardTheme::from_json(r##"{ "active_border": "#1d4ed8" }"##).unwrap();
/// assert_eq!(theme.active_border.to_hex(), "#1d4ed8");
/// assert_eq!(theme.padding, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTheme {
    /// Border of the selected or hovered card
    pub active_border: Color,
    /// Text of the selected or hovered card
    pub active_text: Color,
    /// Border of an idle card
    pub idle_border: Color,
    /// Text of an idle card
    pub idle_text: Color,
    /// Fill of an unselected card
    pub idle_background: Color,
    /// Drop shadow under the selected card
    pub shadow: Color,
    /// Check glyph color
    pub check: Color,
    /// Inner padding
    pub padding: f32,
    /// Vertical gap between stacked items
    pub spacing: f32,
    /// Extra space above the configuration header
    pub header_gap: f32,
    /// Minimum card height
    pub min_height: f32,
    /// Model name font size
    pub name_size: f32,
    /// Configuration header font size
    pub header_size: f32,
    /// Header icon size
    pub header_icon_size: f32,
    /// Check icon size
    pub check_size: f32,
    /// Border width
    pub border_width: f32,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            active_border: Color::rgb8(0x16, 0x65, 0x34),
            active_text: Color::rgb8(0x47, 0x55, 0x69),
            idle_border: Color::rgb8(0xcb, 0xd5, 0xe1),
            idle_text: Color::rgb8(0x94, 0xa3, 0xb8),
            idle_background: Color::WHITE,
            shadow: Color::BLACK.with_alpha(0.05),
            check: Color::rgb8(0x16, 0x65, 0x34),
            padding: 8.0,
            spacing: 8.0,
            header_gap: 12.0,
            min_height: 50.0,
            name_size: 14.0,
            header_size: 14.0,
            header_icon_size: 16.0,
            check_size: 20.0,
            border_width: 1.0,
        }
    }
}

impl CardTheme {
    /// Parse a theme, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or invalid color strings.
    pub fn from_json(json: &str) -> Result<Self, crate::CatalogError> {
        serde_json::from_str(json).map_err(crate::CatalogError::Theme)
    }
}
