use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::TimelineSeries;

use super::round3;

/// Days covered by the dashboard trend chart, today included.
const WINDOW_DAYS: i64 = 7;

/// 7-day safety-trend series for the dashboard.
///
/// Values are mocked fresh on every call (0.5 ± up to 0.15) and do not
/// reflect stored reports. That disconnect is inherited demo behavior,
/// kept deliberately; see DESIGN.md.
pub struct TimelineAggregator;

impl TimelineAggregator {
    pub fn series(today: NaiveDate, rng: &mut impl Rng) -> TimelineSeries {
        let mut labels = Vec::with_capacity(WINDOW_DAYS as usize);
        let mut values = Vec::with_capacity(WINDOW_DAYS as usize);

        for offset in (0..WINDOW_DAYS).rev() {
            let day = today - Duration::days(offset);
            labels.push(day.format("%b %d").to_string());
            values.push(round3(0.5 + (rng.gen::<f64>() - 0.5) * 0.3));
        }

        TimelineSeries { labels, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn always_seven_aligned_entries_oldest_first() {
        let mut rng = SmallRng::seed_from_u64(7);
        let series = TimelineAggregator::series(day(2025, 6, 15), &mut rng);

        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.values.len(), 7);
        assert_eq!(series.labels[0], "Jun 09");
        assert_eq!(series.labels[6], "Jun 15");
    }

    #[test]
    fn window_crosses_month_boundaries() {
        let mut rng = SmallRng::seed_from_u64(7);
        let series = TimelineAggregator::series(day(2025, 3, 2), &mut rng);
        assert_eq!(series.labels[0], "Feb 24");
        assert_eq!(series.labels[6], "Mar 02");
    }

    #[test]
    fn values_stay_within_the_mock_band() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let series = TimelineAggregator::series(day(2025, 6, 15), &mut rng);
            for v in series.values {
                assert!((0.35..=0.65).contains(&v), "value {v} outside 0.5 ± 0.15");
            }
        }
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let a = TimelineAggregator::series(day(2025, 6, 15), &mut SmallRng::seed_from_u64(9));
        let b = TimelineAggregator::series(day(2025, 6, 15), &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
