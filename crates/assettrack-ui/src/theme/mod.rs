//! Theme system for the AssetTrack dashboard
//!
//! Provides the dark and light palettes and the mapping from the persisted
//! theme preference to a concrete palette.

mod colors;

pub use colors::*;

use assettrack_core::ThemeMode;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub spacing: Spacing,
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The default dark theme
    pub fn dark() -> Self {
        Self {
            colors: ThemeColors::dark(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    /// The light theme
    pub fn light() -> Self {
        Self {
            colors: ThemeColors::light(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    /// Palette for a persisted theme mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

/// Spacing constants
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (12px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Extra large spacing (24px)
    pub xl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// Typography settings
#[derive(Debug, Clone)]
pub struct Typography {
    pub base_size: f32,
    pub small_size: f32,
    pub large_size: f32,
    pub header_size: f32,
    pub line_height: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            base_size: 14.0,
            small_size: 12.0,
            large_size: 16.0,
            header_size: 18.0,
            line_height: 1.5,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Header bar height in pixels
    pub const HEADER_HEIGHT: f32 = 64.0;
    /// Dropdown menu width in pixels
    pub const DROPDOWN_WIDTH: f32 = 224.0;
    /// Signing modal max width in pixels
    pub const SIGNING_MODAL_MAX_WIDTH: f32 = 768.0;
    /// Welcome pack modal max width in pixels
    pub const WELCOME_MODAL_MAX_WIDTH: f32 = 896.0;
    /// Signature pad height in pixels
    pub const SIGNATURE_PAD_HEIGHT: f32 = 192.0;
    /// QR code edge length in pixels
    pub const QR_SIZE: f32 = 100.0;
    /// Border radius for dialogs
    pub const BORDER_RADIUS: f32 = 12.0;
    /// Border radius for buttons and inputs
    pub const BORDER_RADIUS_SM: f32 = 6.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_mode() {
        let dark = Theme::for_mode(ThemeMode::Dark);
        let light = Theme::for_mode(ThemeMode::Light);
        assert_eq!(dark.colors.page_bg, ThemeColors::dark().page_bg);
        assert_eq!(light.colors.page_bg, ThemeColors::light().page_bg);
        assert_ne!(dark.colors.page_bg, light.colors.page_bg);
    }
}
