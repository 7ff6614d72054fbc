//! Color themes for the tip form

use ratatui::style::{Color, Modifier, Style};

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub styles: ThemeStyles,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg_primary: Color,
    pub bg_secondary: Color,

    pub fg_primary: Color,
    pub fg_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub border: Color,
    pub border_focused: Color,
    pub switch_track: Color,
}

#[derive(Debug, Clone)]
pub struct ThemeStyles {
    pub title: Style,
    pub footer: Style,
    pub overlay_title: Style,
    pub field_label: Style,
    pub field_label_focused: Style,
    pub field_border: Style,
    pub field_border_focused: Style,
    pub field_text: Style,
    pub field_icon: Style,
    pub cursor: Style,
    pub switch_on: Style,
    pub switch_off: Style,
    pub result: Style,
    pub keybind: Style,
    pub keybind_key: Style,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "catppuccin" | "catppuccin-mocha" => Self::catppuccin_mocha(),
            "material" | "material-light" | "light" => Self::material_light(),
            "tokyo-night" | "tokyonight" => Self::tokyo_night(),
            other => {
                tracing::warn!(theme = other, "Unknown theme, using Tokyo Night");
                Self::tokyo_night()
            }
        }
    }

    /// Tokyo Night theme (default)
    pub fn tokyo_night() -> Self {
        let colors = ThemeColors {
            bg_primary: Color::Rgb(26, 27, 38),
            bg_secondary: Color::Rgb(36, 40, 59),

            fg_primary: Color::Rgb(192, 202, 245),
            fg_muted: Color::Rgb(86, 95, 137),

            accent_primary: Color::Rgb(122, 162, 247),
            accent_secondary: Color::Rgb(187, 154, 247),

            border: Color::Rgb(41, 46, 66),
            border_focused: Color::Rgb(122, 162, 247),
            switch_track: Color::Rgb(52, 59, 88),
        };

        Self::from_colors("Tokyo Night", colors)
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        let colors = ThemeColors {
            bg_primary: Color::Rgb(30, 30, 46),
            bg_secondary: Color::Rgb(49, 50, 68),

            fg_primary: Color::Rgb(205, 214, 244),
            fg_muted: Color::Rgb(147, 153, 178),

            accent_primary: Color::Rgb(137, 180, 250),
            accent_secondary: Color::Rgb(203, 166, 247),

            border: Color::Rgb(69, 71, 90),
            border_focused: Color::Rgb(137, 180, 250),
            switch_track: Color::Rgb(88, 91, 112),
        };

        Self::from_colors("Catppuccin Mocha", colors)
    }

    /// Material 3 baseline light scheme
    pub fn material_light() -> Self {
        let colors = ThemeColors {
            bg_primary: Color::Rgb(255, 251, 254),
            bg_secondary: Color::Rgb(231, 224, 236),

            fg_primary: Color::Rgb(28, 27, 31),
            fg_muted: Color::Rgb(121, 116, 126),

            accent_primary: Color::Rgb(103, 80, 164),
            accent_secondary: Color::Rgb(98, 91, 113),

            border: Color::Rgb(121, 116, 126),
            border_focused: Color::Rgb(103, 80, 164),
            switch_track: Color::Rgb(231, 224, 236),
        };

        Self::from_colors("Material Light", colors)
    }

    fn from_colors(name: &str, colors: ThemeColors) -> Self {
        let styles = ThemeStyles {
            title: Style::default()
                .fg(colors.fg_primary)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(colors.bg_secondary).fg(colors.fg_muted),
            overlay_title: Style::default()
                .fg(colors.accent_primary)
                .add_modifier(Modifier::BOLD),
            field_label: Style::default().fg(colors.fg_muted),
            field_label_focused: Style::default().fg(colors.accent_primary),
            field_border: Style::default().fg(colors.border),
            field_border_focused: Style::default().fg(colors.border_focused),
            field_text: Style::default().fg(colors.fg_primary),
            field_icon: Style::default().fg(colors.accent_secondary),
            cursor: Style::default()
                .fg(colors.bg_primary)
                .bg(colors.fg_primary),
            switch_on: Style::default()
                .fg(colors.bg_primary)
                .bg(colors.accent_primary)
                .add_modifier(Modifier::BOLD),
            switch_off: Style::default()
                .fg(colors.fg_muted)
                .bg(colors.switch_track),
            result: Style::default()
                .fg(colors.accent_primary)
                .add_modifier(Modifier::BOLD),
            keybind: Style::default().fg(colors.fg_muted),
            keybind_key: Style::default()
                .fg(colors.accent_secondary)
                .add_modifier(Modifier::BOLD),
        };

        Self {
            name: name.to_string(),
            colors,
            styles,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}
