//! Position on the reading map for a monotonically growing progress value.

use crate::domain::models::{LevelProgress, LevelThreshold};

/// Locate `value` among `thresholds`.
///
/// Thresholds are taken in ascending `min_value` order whatever order they
/// come in. A value below the lowest threshold sits at the lowest one with a
/// fraction of 0. Returns `None` only when there are no thresholds.
pub fn calculate(value: u32, thresholds: &[LevelThreshold]) -> Option<LevelProgress> {
    let mut ordered: Vec<LevelThreshold> = thresholds.to_vec();
    ordered.sort_by_key(|threshold| threshold.min_value);

    let lowest = *ordered.first()?;
    let current = ordered
        .iter()
        .rev()
        .find(|threshold| threshold.min_value <= value)
        .copied()
        .unwrap_or(lowest);
    let reached = value.max(current.min_value);
    let next = ordered.iter().find(|threshold| threshold.min_value > reached).copied();

    let fraction = match next {
        Some(next) => {
            let span = f64::from(next.min_value) - f64::from(current.min_value);
            let covered = f64::from(value) - f64::from(current.min_value);
            (covered / span).clamp(0.0, 1.0)
        }
        None => 1.0,
    };

    Some(LevelProgress {
        value,
        current,
        next,
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MAP_LEVELS;

    fn thresholds(values: &[u32]) -> Vec<LevelThreshold> {
        values
            .iter()
            .enumerate()
            .map(|(i, min_value)| LevelThreshold {
                level: i as u32 + 1,
                min_value: *min_value,
                name: "parada",
                icon: "",
                description: "",
            })
            .collect()
    }

    #[test]
    fn test_value_between_thresholds() {
        let levels = thresholds(&[0, 5, 10, 20, 50]);
        let progress = calculate(7, &levels).unwrap();

        assert_eq!(progress.current.min_value, 5);
        assert_eq!(progress.next.map(|l| l.min_value), Some(10));
        assert!((progress.fraction - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_exactly_on_threshold_starts_fresh() {
        let progress = calculate(10, &thresholds(&[0, 5, 10, 20, 50])).unwrap();
        assert_eq!(progress.current.min_value, 10);
        assert_eq!(progress.next.map(|l| l.min_value), Some(20));
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn test_at_or_past_last_level() {
        let levels = thresholds(&[0, 5, 10, 20, 50]);
        for value in [50, 51, 400] {
            let progress = calculate(value, &levels).unwrap();
            assert_eq!(progress.current.min_value, 50);
            assert!(progress.next.is_none());
            assert_eq!(progress.fraction, 1.0);
        }
    }

    #[test]
    fn test_below_lowest_threshold_clamps_to_zero() {
        let progress = calculate(1, &thresholds(&[3, 8])).unwrap();
        assert_eq!(progress.current.min_value, 3);
        assert_eq!(progress.next.map(|l| l.min_value), Some(8));
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn test_unsorted_thresholds_are_ordered() {
        let progress = calculate(12, &thresholds(&[20, 0, 10, 5])).unwrap();
        assert_eq!(progress.current.min_value, 10);
        assert_eq!(progress.next.map(|l| l.min_value), Some(20));
        assert!((progress.fraction - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_thresholds() {
        assert!(calculate(3, &[]).is_none());
    }

    #[test]
    fn test_level_never_regresses_as_value_grows() {
        let mut previous_min = 0;
        let mut previous_level = 0;
        for value in 0..=120 {
            let progress = calculate(value, MAP_LEVELS).unwrap();
            assert!(progress.current.min_value >= previous_min);
            assert!(progress.current.level >= previous_level);
            assert!((0.0..=1.0).contains(&progress.fraction));
            previous_min = progress.current.min_value;
            previous_level = progress.current.level;
        }
    }
}
