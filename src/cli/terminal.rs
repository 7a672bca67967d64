//! Terminal colour support

use std::fmt::Display;

use owo_colors::{OwoColorize, Style, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output.
///
/// Styling is skipped when stdout does not support colour.
pub trait Colorize: Display {
    /// Color as success (green)
    fn success(&self) -> String {
        paint(self, Style::new().fg::<css::Green>())
    }

    /// Color as warning (amber)
    fn warning(&self) -> String {
        paint(self, Style::new().fg::<css::Orange>())
    }

    /// Bold heading
    fn heading(&self) -> String {
        paint(self, Style::new().bold())
    }

    /// Dim the text
    fn dim(&self) -> String {
        paint(self, Style::new().dimmed())
    }
}

impl<T: Display + ?Sized> Colorize for T {}

fn paint<T: Display + ?Sized>(text: &T, style: Style) -> String {
    let text = text.to_string();
    if supports_color() {
        text.style(style).to_string()
    } else {
        text
    }
}

/// Marker shown before a category heading.
pub const fn section_marker(expanded: bool) -> &'static str {
    if expanded { "▾" } else { "▸" }
}
