//! Numeric interpretation of race table fields.
//!
//! Every parser here is total: a value that cannot be interpreted yields a
//! default or `None`, never an error.

/// Parses a points value, defaulting to zero.
///
/// Non-finite values (`inf`, `NaN`) also count as zero.
pub fn parse_points(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|points| points.is_finite())
        .unwrap_or(0.0)
}

/// Parses a lap time of the form `M:SS.fff` into seconds.
///
/// Returns `None` for any other shape, which means the lap can never be the
/// fastest of its race.
pub fn parse_lap_time(value: &str) -> Option<f64> {
    let (minutes, seconds) = value.trim().split_once(':')?;
    if seconds.contains(':') {
        return None;
    }
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(f64::from(minutes) * 60.0 + seconds)
}

/// Parses a grid or finishing position as a signed integer.
pub fn parse_position(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Grid minus finishing position, when both are integers.
pub fn positions_gained(grid: &str, position: &str) -> Option<i64> {
    let grid = parse_position(grid)?;
    let position = parse_position(position)?;
    grid.checked_sub(position)
}

/// Finishing position for podium ranking.
///
/// Only strings made entirely of ASCII digits qualify; `DNF`, `DSQ`, blank
/// and signed values do not.
pub fn podium_position(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        assert_eq!(parse_points("18"), 18.0);
        assert_eq!(parse_points(" 12.5 "), 12.5);
        assert_eq!(parse_points(""), 0.0);
        assert_eq!(parse_points("DNF"), 0.0);
        assert_eq!(parse_points("inf"), 0.0);
        assert_eq!(parse_points("NaN"), 0.0);
        assert_eq!(parse_points("-infinity"), 0.0);
    }

    #[test]
    fn test_lap_time() {
        let seconds = parse_lap_time("1:30.685").expect("valid lap");
        assert!((seconds - 90.685).abs() < 1e-9);
        assert_eq!(parse_lap_time("0:59.1"), Some(59.1));
        assert_eq!(parse_lap_time(" 2:05 "), Some(125.0));
    }

    #[test]
    fn test_lap_time_invalid() {
        assert_eq!(parse_lap_time(""), None);
        assert_eq!(parse_lap_time("abc"), None);
        assert_eq!(parse_lap_time("90.685"), None);
        assert_eq!(parse_lap_time("1:02:03.4"), None);
        assert_eq!(parse_lap_time("1.5:30.0"), None);
        assert_eq!(parse_lap_time("1:abc"), None);
        assert_eq!(parse_lap_time("1:inf"), None);
        assert_eq!(parse_lap_time("1:-3.0"), None);
        assert_eq!(parse_lap_time("-1:30.0"), None);
    }

    #[test]
    fn test_positions_gained() {
        assert_eq!(positions_gained("3", "1"), Some(2));
        assert_eq!(positions_gained("1", "5"), Some(-4));
        assert_eq!(positions_gained(" 10 ", "10"), Some(0));
        assert_eq!(positions_gained("3", "DNF"), None);
        assert_eq!(positions_gained("", "1"), None);
        assert_eq!(positions_gained("PL", "4"), None);
    }

    #[test]
    fn test_podium_position() {
        assert_eq!(podium_position("1"), Some(1));
        assert_eq!(podium_position("12"), Some(12));
        assert_eq!(podium_position("DNF"), None);
        assert_eq!(podium_position(""), None);
        assert_eq!(podium_position("-1"), None);
        assert_eq!(podium_position("+2"), None);
        assert_eq!(podium_position("2.0"), None);
    }
}
