use ratatui::style::palette::tailwind;
use ratatui::style::{Color, Modifier, Style};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_normal: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::BLUE.c400,

            // Status
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SLATE.c500,

            // Selection
            selected_bg: tailwind::BLUE.c900,
            selected_fg: tailwind::SLATE.c100,

            // Table
            table_header_bg: tailwind::BLUE.c900,
            table_header_fg: tailwind::SLATE.c200,
            table_row_fg: tailwind::SLATE.c200,
            table_row_bg_normal: tailwind::SLATE.c950,
            table_row_bg_alt: tailwind::SLATE.c900,
        }
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
    }

    /// Style for the selected table row
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel borders
    pub fn border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for muted helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
