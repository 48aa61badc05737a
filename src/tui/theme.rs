//! Styles for the browser screen, grouped so every widget pulls from
//! one palette.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub header: Style,
    pub brand: Style,
    pub listing_title: Style,
    pub rate: Style,
    pub available: Style,
    pub unavailable: Style,
    pub slider_arrow: Style,
    pub slider_active: Style,
    pub slider_inactive: Style,
    pub selected: Style,
    pub muted: Style,
    pub cursor: Style,
    pub notice: Style,
    pub help_key: Style,
    pub help_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            brand: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            listing_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            rate: Style::default().fg(Color::Green),
            available: Style::default().fg(Color::Green),
            unavailable: Style::default().fg(Color::Red),
            slider_arrow: Style::default().fg(Color::Cyan),
            slider_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            slider_inactive: Style::default().fg(Color::DarkGray),
            selected: Style::default().bg(Color::DarkGray),
            muted: Style::default().fg(Color::DarkGray),
            cursor: Style::default().fg(Color::White),
            notice: Style::default().fg(Color::Yellow),
            help_key: Style::default().fg(Color::Cyan),
            help_text: Style::default().fg(Color::DarkGray),
        }
    }
}
