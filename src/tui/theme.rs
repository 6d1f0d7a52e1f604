//! TUI Theme - Consistent, elegant styling
//!
//! Dark palette matching the upstream presentation. The accent color can be
//! overridden from config; everything else is fixed.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Success indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Map a configured accent color name to a concrete color. Unknown names
/// fall back to the default accent.
pub fn accent_from_name(name: Option<&str>) -> Color {
    match name.map(str::to_ascii_lowercase).as_deref() {
        Some("cyan") => Color::Cyan,
        Some("blue") => Color::Blue,
        Some("green") => Color::Green,
        Some("magenta") => Color::Magenta,
        Some("yellow") => Color::Yellow,
        Some("white") => Color::White,
        _ => ACCENT,
    }
}

/// Header/title style
pub fn title(accent: Color) -> Style {
    Style::default().fg(accent).add_modifier(Modifier::BOLD)
}

/// Subtitle/secondary text style
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active(accent: Color) -> Style {
    Style::default().fg(accent)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message prefix style
pub fn user_prefix(accent: Color) -> Style {
    Style::default().fg(accent).add_modifier(Modifier::BOLD)
}

/// Assistant message prefix style
pub fn assistant_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

/// System message style
pub fn system_prefix() -> Style {
    Style::default()
        .fg(HIGHLIGHT)
        .add_modifier(Modifier::ITALIC)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}
