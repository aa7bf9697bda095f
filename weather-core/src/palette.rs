//! Named color themes.
//!
//! A [`Palette`] maps every [`Role`] to a concrete [`Rgb`]. The mapping is a
//! fixed-size array indexed by the role, so a palette cannot leave a role
//! undefined.

use std::{fmt, str::FromStr};

use anyhow::anyhow;

use crate::scene::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb { r: c.r, g: c.g, b: c.b }
    }
}

/// The built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteName {
    #[default]
    Day,
    Night,
    Retro,
}

impl PaletteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteName::Day => "day",
            PaletteName::Night => "night",
            PaletteName::Retro => "retro",
        }
    }

    pub const fn all() -> &'static [PaletteName] {
        &[PaletteName::Day, PaletteName::Night, PaletteName::Retro]
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            PaletteName::Day => &DAY,
            PaletteName::Night => &NIGHT,
            PaletteName::Retro => &RETRO,
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "day" => Ok(PaletteName::Day),
            "night" => Ok(PaletteName::Night),
            "retro" => Ok(PaletteName::Retro),
            _ => Err(anyhow!(
                "Unknown palette '{value}'. Supported palettes: day, night, retro."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: PaletteName,
    colors: [Rgb; Role::COUNT],
}

impl Palette {
    #[inline]
    pub fn color(&self, role: Role) -> Rgb {
        self.colors[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Rgb)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.color(role)))
    }
}

/// Look up a theme by name.
///
/// Never fails: an unknown or absent name yields the day palette, the same
/// `'static` value `get_palette(Some("day"))` returns.
pub fn get_palette(name: Option<&str>) -> &'static Palette {
    name.and_then(|n| n.parse::<PaletteName>().ok())
        .unwrap_or_default()
        .palette()
}

// Entries follow `Role::ALL` order.
pub static DAY: Palette = Palette {
    name: PaletteName::Day,
    colors: [
        Rgb::from_hex(0x87CEEB), // sky
        Rgb::from_hex(0xFFD700), // sun
        Rgb::from_hex(0xFFA500), // sunRay
        Rgb::from_hex(0xC0C0C0), // cloud
        Rgb::from_hex(0x808080), // cloudDark
        Rgb::from_hex(0x4169E1), // rain
        Rgb::from_hex(0xF0F8FF), // snow
        Rgb::from_hex(0xFFFF00), // lightning
        Rgb::from_hex(0xA9A9A9), // fog
        Rgb::from_hex(0x228B22), // ground
        Rgb::from_hex(0x8B0000), // houseRoof
        Rgb::from_hex(0xD2B48C), // houseWall
        Rgb::from_hex(0x00CED1), // houseWindow
        Rgb::from_hex(0x8B4513), // houseDoor
        Rgb::from_hex(0xF5F5DC), // moon
        Rgb::from_hex(0xFFFACD), // star
    ],
};

pub static NIGHT: Palette = Palette {
    name: PaletteName::Night,
    colors: [
        Rgb::from_hex(0x191970),
        Rgb::from_hex(0xFFD700),
        Rgb::from_hex(0xFFA500),
        Rgb::from_hex(0x4A4A4A),
        Rgb::from_hex(0x2F2F2F),
        Rgb::from_hex(0x4682B4),
        Rgb::from_hex(0xB0C4DE),
        Rgb::from_hex(0xFFFFE0),
        Rgb::from_hex(0x3A3A3A),
        Rgb::from_hex(0x004400),
        Rgb::from_hex(0x8B008B),
        Rgb::from_hex(0x6B4423),
        Rgb::from_hex(0xFFD700), // lit windows
        Rgb::from_hex(0x5C3317),
        Rgb::from_hex(0xF5F5DC),
        Rgb::from_hex(0xFFFACD),
    ],
};

pub static RETRO: Palette = Palette {
    name: PaletteName::Retro,
    colors: [
        Rgb::from_hex(0x5B6EE1),
        Rgb::from_hex(0xFBF236),
        Rgb::from_hex(0xFBF236),
        Rgb::from_hex(0x9BADB7),
        Rgb::from_hex(0x6B7B8B),
        Rgb::from_hex(0x3F3FBF),
        Rgb::from_hex(0xFFFFFF),
        Rgb::from_hex(0xFBFF86),
        Rgb::from_hex(0x76767B),
        Rgb::from_hex(0x37946E),
        Rgb::from_hex(0xAC3232),
        Rgb::from_hex(0xD9A066),
        Rgb::from_hex(0x5FCDE4),
        Rgb::from_hex(0x76428A),
        Rgb::from_hex(0xCBDBFC),
        Rgb::from_hex(0xFFFFFF),
    ],
};
