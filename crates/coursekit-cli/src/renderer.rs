//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use coursekit_core::{Notification, NotificationLevel};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Show a notification. Warnings and errors go to standard error.
    pub fn notify(&self, notification: &Notification) -> Result<()> {
        match notification.level {
            NotificationLevel::Error | NotificationLevel::Warning => {
                if self.rich_enabled {
                    eprint!("\x1b[{}m{notification}\x1b[0m", Self::ansi_color(notification.level));
                } else {
                    eprint!("{notification}");
                }
                Ok(())
            }
            NotificationLevel::Success | NotificationLevel::Info => {
                self.render(&notification.to_string())
            }
        }
    }

    fn ansi_color(level: NotificationLevel) -> u8 {
        match level {
            NotificationLevel::Error => 31,
            NotificationLevel::Warning => 33,
            NotificationLevel::Success => 32,
            NotificationLevel::Info => 36,
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
