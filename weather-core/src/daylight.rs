/// Whether `current` falls between sunrise (inclusive) and sunset (exclusive).
///
/// All values are Unix epoch seconds. Missing astronomical data counts as
/// daytime so the caller always has something to draw.
pub fn is_daytime(current: i64, sunrise: Option<i64>, sunset: Option<i64>) -> bool {
    match (sunrise, sunset) {
        (Some(rise), Some(set)) => rise <= current && current < set,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUNRISE: i64 = 1_700_000_000;
    const SUNSET: i64 = SUNRISE + 10 * 3600;

    #[test]
    fn daytime_window_is_half_open() {
        assert!(is_daytime(SUNRISE, Some(SUNRISE), Some(SUNSET)));
        assert!(is_daytime(SUNSET - 1, Some(SUNRISE), Some(SUNSET)));
        assert!(!is_daytime(SUNSET, Some(SUNRISE), Some(SUNSET)));
        assert!(!is_daytime(SUNRISE - 1, Some(SUNRISE), Some(SUNSET)));
        assert!(!is_daytime(SUNSET + 3600, Some(SUNRISE), Some(SUNSET)));
    }

    #[test]
    fn missing_sun_times_default_to_day() {
        assert!(is_daytime(0, None, Some(SUNSET)));
        assert!(is_daytime(SUNSET + 1, Some(SUNRISE), None));
        assert!(is_daytime(-5, None, None));
    }
}
