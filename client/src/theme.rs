use std::fmt;

use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    pub fn bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub background: Rgb,
    pub card: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    pub notification: Rgb,
}

pub const LIGHT_PALETTE: Palette = Palette {
    primary: Rgb(0x00, 0x7A, 0xFF),
    background: Rgb(0xF2, 0xF2, 0xF7),
    card: Rgb(0xFF, 0xFF, 0xFF),
    text: Rgb(0x00, 0x00, 0x00),
    border: Rgb(0xC7, 0xC7, 0xCC),
    notification: Rgb(0xFF, 0x3B, 0x30),
};

pub const DARK_PALETTE: Palette = Palette {
    primary: Rgb(0x0A, 0x84, 0xFF),
    background: Rgb(0x1C, 0x1C, 0x1E),
    card: Rgb(0x2C, 0x2C, 0x2E),
    text: Rgb(0xFF, 0xFF, 0xFF),
    border: Rgb(0x38, 0x38, 0x3A),
    notification: Rgb(0xFF, 0x45, 0x3A),
};

/// Mark colours do not depend on the theme.
pub fn mark_color(mark: Mark) -> Option<Rgb> {
    match mark {
        Mark::X => Some(Rgb(0xFF, 0x52, 0x52)),
        Mark::O => Some(Rgb(0x21, 0x96, 0xF3)),
        Mark::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_follow_theme() {
        assert_eq!(Theme::Light.palette().primary.to_string(), "#007AFF");
        assert_eq!(Theme::Dark.palette().background.to_string(), "#1C1C1E");
        assert_eq!(Theme::Dark.palette().notification.to_string(), "#FF453A");
    }

    #[test]
    fn test_mark_colors() {
        assert_eq!(mark_color(Mark::X).unwrap().to_string(), "#FF5252");
        assert_eq!(mark_color(Mark::O).unwrap().to_string(), "#2196F3");
        assert_eq!(mark_color(Mark::Empty), None);
    }

    #[test]
    fn test_ansi_escape() {
        assert_eq!(Rgb(1, 2, 3).fg(), "\x1b[38;2;1;2;3m");
        assert_eq!(Rgb(1, 2, 3).bg(), "\x1b[48;2;1;2;3m");
    }
}
