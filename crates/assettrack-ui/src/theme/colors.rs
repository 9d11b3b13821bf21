//! Color definitions for the AssetTrack theme
//!
//! The dashboard's slate/blue palette, one set per theme mode.

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create with alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// CSS color expression, `#rrggbb` for opaque colors and `rgba(...)`
    /// otherwise.
    pub fn to_css(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        if (self.a - 1.0).abs() < f32::EPSILON {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {:.2})", r, g, b, self.a)
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    /// Page background
    pub page_bg: Rgba,
    /// Card/panel surface
    pub surface: Rgba,
    /// Raised surface (dropdown, modal)
    pub surface_raised: Rgba,
    /// Input field background
    pub input_bg: Rgba,
    /// Dimming layer behind open modals
    pub overlay_backdrop: Rgba,

    // === Brand ===
    /// Primary action color
    pub primary: Rgba,
    /// Primary hover state
    pub primary_hover: Rgba,
    /// Secondary accent
    pub accent: Rgba,

    // === Text ===
    pub text_primary: Rgba,
    pub text_secondary: Rgba,
    pub text_muted: Rgba,

    // === Status ===
    pub success: Rgba,
    pub warning: Rgba,
    pub error: Rgba,
    pub info: Rgba,

    // === UI Elements ===
    pub border: Rgba,
    pub divider: Rgba,
    pub focus_ring: Rgba,

    // === Signing dialog ===
    /// Employee signature pen
    pub pen_employee: Rgba,
    /// IT representative signature pen
    pub pen_it: Rgba,
    /// QR module color
    pub qr_foreground: Rgba,
    /// QR quiet-zone color
    pub qr_background: Rgba,
}

impl ThemeColors {
    /// Dark palette (the default)
    pub fn dark() -> Self {
        Self {
            page_bg: Rgba::rgb(0x0f172a),
            surface: Rgba::rgb(0x1e293b),
            surface_raised: Rgba::rgb(0x334155),
            input_bg: Rgba::rgb(0x0f172a),
            overlay_backdrop: Rgba::rgb(0x0f172a).with_alpha(0.75),

            primary: Rgba::rgb(0x2563eb),
            primary_hover: Rgba::rgb(0x1d4ed8),
            accent: Rgba::rgb(0x8b5cf6),

            text_primary: Rgba::rgb(0xf8fafc),
            text_secondary: Rgba::rgb(0xcbd5e1),
            text_muted: Rgba::rgb(0x94a3b8),

            success: Rgba::rgb(0x22c55e),
            warning: Rgba::rgb(0xf59e0b),
            error: Rgba::rgb(0xef4444),
            info: Rgba::rgb(0x3b82f6),

            border: Rgba::rgb(0x334155),
            divider: Rgba::rgb(0x1e293b),
            focus_ring: Rgba::rgb(0x3b82f6),

            pen_employee: Rgba::rgb(0x3b82f6),
            pen_it: Rgba::rgb(0x8b5cf6),
            qr_foreground: Rgba::rgb(0x3b82f6),
            qr_background: Rgba::rgb(0x1e293b),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            page_bg: Rgba::rgb(0xf8fafc),
            surface: Rgba::rgb(0xffffff),
            surface_raised: Rgba::rgb(0xf1f5f9),
            input_bg: Rgba::rgb(0xffffff),
            overlay_backdrop: Rgba::rgb(0x0f172a).with_alpha(0.5),

            primary: Rgba::rgb(0x2563eb),
            primary_hover: Rgba::rgb(0x1d4ed8),
            accent: Rgba::rgb(0x7c3aed),

            text_primary: Rgba::rgb(0x0f172a),
            text_secondary: Rgba::rgb(0x475569),
            text_muted: Rgba::rgb(0x64748b),

            success: Rgba::rgb(0x16a34a),
            warning: Rgba::rgb(0xd97706),
            error: Rgba::rgb(0xdc2626),
            info: Rgba::rgb(0x2563eb),

            border: Rgba::rgb(0xe2e8f0),
            divider: Rgba::rgb(0xcbd5e1),
            focus_ring: Rgba::rgb(0x2563eb),

            pen_employee: Rgba::rgb(0x2563eb),
            pen_it: Rgba::rgb(0x7c3aed),
            qr_foreground: Rgba::rgb(0x1d4ed8),
            qr_background: Rgba::rgb(0xffffff),
        }
    }
}
