//! Color palette for the TUI.

use ratatui::style::{Color, Style};

/// Colors used directly by UI rendering.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: Color,
    pub dialog_bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub accent_secondary: Color,
    pub highlight: Color,
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl ThemeColors {
    pub const DEFAULT: ThemeColors = ThemeColors {
        bg: Color::Rgb(22, 24, 30),
        dialog_bg: Color::Rgb(32, 35, 44),
        fg: Color::Rgb(220, 223, 228),
        accent: Color::Rgb(98, 174, 239),
        accent_secondary: Color::Rgb(198, 120, 221),
        highlight: Color::Rgb(229, 192, 123),
        muted: Color::Rgb(127, 132, 142),
        success: Color::Rgb(152, 195, 121),
        warning: Color::Rgb(229, 192, 123),
        danger: Color::Rgb(224, 108, 117),
        border: Color::Rgb(62, 68, 81),
        selection_bg: Color::Rgb(98, 174, 239),
        selection_fg: Color::Rgb(22, 24, 30),
    };

    #[inline]
    pub fn fg_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    #[inline]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[inline]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[inline]
    pub fn accent_secondary_style(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    #[inline]
    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    #[inline]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[inline]
    pub fn danger_style(&self) -> Style {
        Style::default().fg(self.danger)
    }

    #[inline]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[inline]
    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.selection_fg).bg(self.selection_bg)
    }
}
