use crate::types::StatValue;

pub const ZERO_TOI: &str = "00:00";

/// Differentials carry an explicit `+` when positive. Zero and negative
/// values stay numeric.
pub fn signed(n: i64) -> StatValue {
    if n > 0 {
        StatValue::Text(format!("+{n}"))
    } else {
        StatValue::Number(n)
    }
}

pub fn fixed(value: f64, places: usize) -> StatValue {
    StatValue::Text(format!("{value:.places$}"))
}

/// Save percentage style: three decimals.
pub fn percentage(value: f64) -> StatValue {
    fixed(value, 3)
}

/// Per-game averages such as GAA: two decimals.
pub fn average(value: f64) -> StatValue {
    fixed(value, 2)
}

/// Whole minutes of a `mm:ss` time-on-ice string.
pub fn toi_minutes(toi: &str) -> i64 {
    toi.split(':')
        .next()
        .and_then(|m| m.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_signed() {
        assert_eq!(signed(3), StatValue::Text("+3".into()));
        assert_eq!(signed(0), StatValue::Number(0));
        assert_eq!(signed(-2), StatValue::Number(-2));
    }

    #[test]
    fn test_percentage_and_average() {
        assert_eq!(percentage(0.917), StatValue::Text("0.917".into()));
        assert_eq!(percentage(0.91), StatValue::Text("0.910".into()));
        assert_eq!(average(2.5), StatValue::Text("2.50".into()));
    }

    #[test]
    fn test_toi_minutes() {
        assert_eq!(toi_minutes("18:30"), 18);
        assert_eq!(toi_minutes(ZERO_TOI), 0);
        assert_eq!(toi_minutes("21"), 21);
        assert_eq!(toi_minutes(""), 0);
        assert_eq!(toi_minutes("xx:10"), 0);
    }
}
