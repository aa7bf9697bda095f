//! Condition code to scene mapping.
//!
//! Codes follow the OpenWeather condition table. Only the listed codes are
//! recognised; anything else draws the cloudy scene.

use crate::scene::{self, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    ClearDay,
    ClearNight,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Fog,
}

impl SceneKind {
    pub fn scene(self) -> &'static Scene {
        match self {
            SceneKind::ClearDay => &scene::CLEAR_DAY,
            SceneKind::ClearNight => &scene::CLEAR_NIGHT,
            SceneKind::Cloudy => &scene::CLOUDY,
            SceneKind::Rain => &scene::RAIN,
            SceneKind::Snow => &scene::SNOW,
            SceneKind::Thunderstorm => &scene::THUNDERSTORM,
            SceneKind::Fog => &scene::FOG,
        }
    }
}

/// Every code in the published table.
pub const KNOWN_CODES: &[u16] = &[
    200, 201, 202, 210, 211, 212, 221, 230, 231, 232, //
    300, 301, 302, 310, 311, 312, 313, 314, 321, //
    500, 501, 502, 503, 504, 511, 520, 521, 522, 531, //
    600, 601, 602, 611, 612, 613, 615, 616, 620, 621, 622, //
    701, 711, 721, 731, 741, 751, 761, 762, 771, 781, //
    800, 801, 802, 803, 804,
];

pub fn scene_kind(code: u16, is_day: bool) -> SceneKind {
    match code {
        200..=202 | 210..=212 | 221 | 230..=232 => SceneKind::Thunderstorm,
        300..=302 | 310..=314 | 321 => SceneKind::Rain,
        // Freezing rain is drawn as snow.
        511 => SceneKind::Snow,
        500..=504 | 520..=522 | 531 => SceneKind::Rain,
        600..=602 | 611..=613 | 615 | 616 | 620..=622 => SceneKind::Snow,
        701 | 711 | 721 | 731 | 741 | 751 | 761 | 762 | 771 | 781 => SceneKind::Fog,
        800 if is_day => SceneKind::ClearDay,
        800 => SceneKind::ClearNight,
        // Listed to mirror the published table; same result as the fallback.
        801..=804 => SceneKind::Cloudy,
        _ => SceneKind::Cloudy,
    }
}

pub fn get_scene(code: u16, is_day: bool) -> &'static Scene {
    scene_kind(code, is_day).scene()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_yields_well_formed_scene() {
        for &code in KNOWN_CODES {
            for is_day in [true, false] {
                let scene = get_scene(code, is_day);
                for frame in scene.frames {
                    assert_eq!(frame.len(), scene.height, "code {code}");
                    assert!(frame.iter().all(|l| l.chars().count() <= scene.width));
                }
            }
        }
    }

    #[test]
    fn clear_sky_depends_on_daylight() {
        let day = get_scene(800, true);
        let night = get_scene(800, false);
        assert_ne!(day, night);
        assert!(std::ptr::eq(day, &scene::CLEAR_DAY));
        assert!(std::ptr::eq(night, &scene::CLEAR_NIGHT));
    }

    #[test]
    fn daylight_only_matters_for_clear_sky() {
        for &code in KNOWN_CODES.iter().filter(|&&c| c != 800) {
            assert!(
                std::ptr::eq(get_scene(code, true), get_scene(code, false)),
                "code {code}"
            );
        }
    }

    #[test]
    fn groups_map_to_expected_scenes() {
        assert_eq!(scene_kind(211, true), SceneKind::Thunderstorm);
        assert_eq!(scene_kind(300, true), SceneKind::Rain);
        assert_eq!(scene_kind(502, false), SceneKind::Rain);
        assert_eq!(scene_kind(511, true), SceneKind::Snow);
        assert_eq!(scene_kind(622, true), SceneKind::Snow);
        assert_eq!(scene_kind(741, true), SceneKind::Fog);
        assert_eq!(scene_kind(804, true), SceneKind::Cloudy);
    }

    #[test]
    fn unknown_codes_fall_back_to_cloudy() {
        for code in [0, 1, 199, 203, 233, 505, 700, 799, 805, 900, u16::MAX] {
            assert!(
                std::ptr::eq(get_scene(code, true), &scene::CLOUDY),
                "code {code}"
            );
            assert!(std::ptr::eq(get_scene(code, false), &scene::CLOUDY));
        }
    }
}
