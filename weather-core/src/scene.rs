//! Weather art assets.
//!
//! A [`Scene`] is a fixed-size block of text with one or more frames. Every
//! non-space character is painted with a symbolic [`Role`]; the active
//! [`Palette`](crate::palette::Palette) decides the concrete color.

mod clear_day;
mod clear_night;
mod cloudy;
mod fog;
mod rain;
mod snow;
mod thunderstorm;

pub use clear_day::CLEAR_DAY;
pub use clear_night::CLEAR_NIGHT;
pub use cloudy::CLOUDY;
pub use fog::FOG;
pub use rain::RAIN;
pub use snow::SNOW;
pub use thunderstorm::THUNDERSTORM;

/// Every built-in scene.
pub static ALL: [&Scene; 7] = [
    &CLEAR_DAY,
    &CLEAR_NIGHT,
    &CLOUDY,
    &RAIN,
    &SNOW,
    &THUNDERSTORM,
    &FOG,
];

/// Symbolic color category shared by scenes and palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Sky,
    Sun,
    SunRay,
    Cloud,
    CloudDark,
    Rain,
    Snow,
    Lightning,
    Fog,
    Ground,
    HouseRoof,
    HouseWall,
    HouseWindow,
    HouseDoor,
    Moon,
    Star,
}

impl Role {
    pub const COUNT: usize = 16;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Sky,
        Role::Sun,
        Role::SunRay,
        Role::Cloud,
        Role::CloudDark,
        Role::Rain,
        Role::Snow,
        Role::Lightning,
        Role::Fog,
        Role::Ground,
        Role::HouseRoof,
        Role::HouseWall,
        Role::HouseWindow,
        Role::HouseDoor,
        Role::Moon,
        Role::Star,
    ];

    /// Position of this role in [`Role::ALL`]; palettes are indexed by it.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Role::Sky => "sky",
            Role::Sun => "sun",
            Role::SunRay => "sunRay",
            Role::Cloud => "cloud",
            Role::CloudDark => "cloudDark",
            Role::Rain => "rain",
            Role::Snow => "snow",
            Role::Lightning => "lightning",
            Role::Fog => "fog",
            Role::Ground => "ground",
            Role::HouseRoof => "houseRoof",
            Role::HouseWall => "houseWall",
            Role::HouseWindow => "houseWindow",
            Role::HouseDoor => "houseDoor",
            Role::Moon => "moon",
            Role::Star => "star",
        }
    }

    pub fn from_key(key: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_key() == key)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

/// One complete grid of lines for a single instant of a scene.
pub type Frame = &'static [&'static str];

/// A named, fixed-dimension text art asset.
///
/// Scenes are plain `static` data. Frames must all be exactly `height`
/// lines of at most `width` characters; the tests in this module check that
/// for every built-in scene.
#[derive(Debug)]
pub struct Scene {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// Role for characters missing from `char_roles`.
    pub default_role: Role,
    pub char_roles: &'static [(char, Role)],
    pub frames: &'static [Frame],
}

impl Scene {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.frame_count() > 1
    }

    /// Lines of the frame at `frame_index`, wrapping around the frame count.
    pub fn art(&self, frame_index: usize) -> Frame {
        self.frames[frame_index % self.frames.len()]
    }

    pub fn role_for(&self, ch: char) -> Role {
        self.char_roles
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, role)| *role)
            .unwrap_or(self.default_role)
    }

    /// Roles this scene can paint with.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        std::iter::once(self.default_role).chain(self.char_roles.iter().map(|(_, role)| *role))
    }
}

impl PartialEq for Scene {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Scene {}
