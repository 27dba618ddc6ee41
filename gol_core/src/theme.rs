// theme.rs - Site theme flag and the backdrop palette it selects

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme {0:?}, expected \"dark\" or \"light\"")]
    Unknown(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour {0:?} is not of the form #rrggbb")]
    Malformed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark  => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark  => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else if trimmed.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else {
            Err(ThemeError::Unknown(s.to_owned()))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// From a packed `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::Malformed(s.to_owned()))?;
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::Malformed(s.to_owned()))?;
        Ok(Self::hex(value))
    }
}

/// The four colours the backdrop paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    pub dead: Rgb,
    pub live: Rgb,
    pub grid_line: Rgb,
    pub border: Rgb,
}

impl Palette {
    pub const DARK: Palette = Palette {
        dead:      Rgb::hex(0x000000),
        live:      Rgb::hex(0xcccccc),
        grid_line: Rgb::hex(0x222222),
        border:    Rgb::hex(0x444444),
    };

    pub const LIGHT: Palette = Palette {
        dead:      Rgb::hex(0xf0f0f0),
        live:      Rgb::hex(0x222222),
        grid_line: Rgb::hex(0xe0e0e0),
        border:    Rgb::hex(0xd0d0d0),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark  => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }
}
