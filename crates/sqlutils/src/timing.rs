use chrono::Utc;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Current wall-clock time as fractional Unix seconds.
pub fn now_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Hours elapsed between two Unix timestamps (seconds), rounded to two
/// decimals. A missing `end` means now.
pub fn calc_time(start: f64, end: Option<f64>) -> f64 {
    let end = end.unwrap_or_else(now_secs);
    round2((end - start) / SECONDS_PER_HOUR)
}

// Halfway values go to the even neighbour: 0.125 -> 0.12.
fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hour() {
        assert_eq!(calc_time(0.0, Some(3600.0)), 1.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(calc_time(0.0, Some(5400.0)), 1.5);
        assert_eq!(calc_time(0.0, Some(1000.0)), 0.28);
        assert_eq!(calc_time(3600.0, Some(0.0)), -1.0);
    }

    #[test]
    fn halfway_rounds_to_even() {
        assert_eq!(calc_time(0.0, Some(450.0)), 0.12);
        assert_eq!(calc_time(450.0, Some(0.0)), -0.12);
        assert_eq!(calc_time(0.0, Some(1350.0)), 0.38);
    }

    #[test]
    fn defaults_to_now() {
        let start = now_secs() - 7200.0;
        let hours = calc_time(start, None);
        assert!((hours - 2.0).abs() <= 0.01, "got {}", hours);
    }
}
