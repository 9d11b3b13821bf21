//! Icon glyphs for the dashboard chrome
//!
//! Glyph names follow the lucide icon set the dashboard renders with.
//! Rendering itself (SVG injection, re-scanning the page) is the
//! embedder's concern; the chrome only decides which glyph is showing.

use assettrack_core::{AssetCategory, IndicatorKind, IndicatorState, ThemeMode};

/// Icon names the chrome can ask the page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    // Theme control
    Sun,
    Moon,

    // Indicator pairs
    ChevronDown,
    ChevronUp,
    Menu,
    X,

    // Header controls
    Bell,
    HelpCircle,
    User,

    // Asset categories
    Laptop,
    Smartphone,
    Mouse,

    // Signing dialog affordances
    Trash,
    RotateCcw,
    Info,

    // Welcome pack contacts
    Headphones,
    Users,
    Wifi,
}

impl IconName {
    /// Lucide glyph name, as used in `data-lucide` markup attributes.
    pub fn name(&self) -> &'static str {
        match self {
            IconName::Sun => "sun",
            IconName::Moon => "moon",
            IconName::ChevronDown => "chevron-down",
            IconName::ChevronUp => "chevron-up",
            IconName::Menu => "menu",
            IconName::X => "x",
            IconName::Bell => "bell",
            IconName::HelpCircle => "help-circle",
            IconName::User => "user",
            IconName::Laptop => "laptop",
            IconName::Smartphone => "smartphone",
            IconName::Mouse => "mouse",
            IconName::Trash => "trash-2",
            IconName::RotateCcw => "rotate-ccw",
            IconName::Info => "info",
            IconName::Headphones => "headphones",
            IconName::Users => "users",
            IconName::Wifi => "wifi",
        }
    }
}

impl serde::Serialize for IconName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Companion indicator glyph for a panel state.
pub fn indicator_icon(kind: IndicatorKind, state: IndicatorState) -> IconName {
    match (kind, state) {
        (IndicatorKind::Chevron, IndicatorState::Collapsed) => IconName::ChevronDown,
        (IndicatorKind::Chevron, IndicatorState::Expanded) => IconName::ChevronUp,
        (IndicatorKind::NavToggle, IndicatorState::Collapsed) => IconName::Menu,
        (IndicatorKind::NavToggle, IndicatorState::Expanded) => IconName::X,
    }
}

/// Theme control glyph: light mode shows the moon, dark mode the sun.
pub fn theme_icon(mode: ThemeMode) -> IconName {
    match mode {
        ThemeMode::Light => IconName::Moon,
        ThemeMode::Dark => IconName::Sun,
    }
}

/// Glyph for an asset line in the handover summary.
pub fn asset_icon(category: AssetCategory) -> IconName {
    match category {
        AssetCategory::Laptop => IconName::Laptop,
        AssetCategory::Phone => IconName::Smartphone,
        AssetCategory::Peripheral => IconName::Mouse,
    }
}
