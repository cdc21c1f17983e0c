//! Theme system
//!
//! Provides:
//! - Theme struct with all UI colors, including status badge colors
//! - Built-in presets (default, catppuccin, nord, gruvbox)
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

use crate::status::StatusCategory;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main content background
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Sidebar, top bar and card background
    pub surface: Color,
    /// Background of every other table row
    pub stripe: Color,
    /// Background of the sidebar cursor
    pub selection_bg: Color,
    /// Active section, headings
    pub accent: Color,
    /// Secondary text (labels, hints)
    pub dimmed: Color,
    /// Borders
    pub border: Color,
    /// Success badge
    pub positive: Color,
    /// Failure badge
    pub negative: Color,
    /// Refund badge
    pub notice: Color,
    /// Badge for statuses without a category
    pub neutral: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::blade()
    }
}

impl Theme {
    /// Default theme, light-on-dark with a blue accent
    pub fn blade() -> Self {
        Self {
            background: Color::Rgb(14, 17, 23),    // #0e1117
            foreground: Color::Rgb(229, 234, 241), // #e5eaf1
            surface: Color::Rgb(22, 27, 36),       // #161b24
            stripe: Color::Rgb(28, 34, 46),        // #1c222e
            selection_bg: Color::Rgb(32, 44, 68),  // #202c44
            accent: Color::Rgb(48, 94, 255),       // #305eff
            dimmed: Color::Rgb(156, 163, 175),     // #9ca3af
            border: Color::Rgb(55, 65, 81),        // #374151
            positive: Color::Rgb(34, 197, 94),     // #22c55e
            negative: Color::Rgb(239, 68, 68),     // #ef4444
            notice: Color::Rgb(245, 158, 11),      // #f59e0b
            neutral: Color::Rgb(107, 114, 128),    // #6b7280
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),    // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244), // #cdd6f4 (text)
            surface: Color::Rgb(24, 24, 37),       // #181825 (mantle)
            stripe: Color::Rgb(49, 50, 68),        // #313244 (surface0)
            selection_bg: Color::Rgb(69, 71, 90),  // #45475a (surface1)
            accent: Color::Rgb(137, 180, 250),     // #89b4fa (blue)
            dimmed: Color::Rgb(166, 173, 200),     // #a6adc8 (subtext0)
            border: Color::Rgb(88, 91, 112),       // #585b70 (surface2)
            positive: Color::Rgb(166, 227, 161),   // #a6e3a1 (green)
            negative: Color::Rgb(243, 139, 168),   // #f38ba8 (red)
            notice: Color::Rgb(249, 226, 175),     // #f9e2af (yellow)
            neutral: Color::Rgb(147, 153, 178),    // #9399b2 (overlay2)
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),    // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244), // #eceff4 (nord6)
            surface: Color::Rgb(59, 66, 82),       // #3b4252 (nord1)
            stripe: Color::Rgb(67, 76, 94),        // #434c5e (nord2)
            selection_bg: Color::Rgb(76, 86, 106), // #4c566a (nord3)
            accent: Color::Rgb(136, 192, 208),     // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),     // #d8dee9 (nord4)
            border: Color::Rgb(76, 86, 106),       // #4c566a (nord3)
            positive: Color::Rgb(163, 190, 140),   // #a3be8c (nord14)
            negative: Color::Rgb(191, 97, 106),    // #bf616a (nord11)
            notice: Color::Rgb(235, 203, 139),     // #ebcb8b (nord13)
            neutral: Color::Rgb(129, 161, 193),    // #81a1c1 (nord9)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),    // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178), // #ebdbb2 (fg)
            surface: Color::Rgb(29, 32, 33),       // #1d2021 (bg0_h)
            stripe: Color::Rgb(60, 56, 54),        // #3c3836 (bg1)
            selection_bg: Color::Rgb(80, 73, 69),  // #504945 (bg2)
            accent: Color::Rgb(215, 153, 33),      // #d79921 (yellow)
            dimmed: Color::Rgb(168, 153, 132),     // #a89984 (gray)
            border: Color::Rgb(102, 92, 84),       // #665c54 (bg3)
            positive: Color::Rgb(152, 151, 26),    // #98971a (green)
            negative: Color::Rgb(204, 36, 29),     // #cc241d (red)
            notice: Color::Rgb(254, 128, 25),      // #fe8019 (orange)
            neutral: Color::Rgb(146, 131, 116),    // #928374 (gray)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "blade" => Some(Self::blade()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Badge color for a status category
    pub fn status_color(&self, category: StatusCategory) -> Color {
        match category {
            StatusCategory::Positive => self.positive,
            StatusCategory::Negative => self.negative,
            StatusCategory::Notice => self.notice,
            StatusCategory::Unmapped => self.neutral,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa (alpha ignored)
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}
