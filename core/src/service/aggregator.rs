use crate::model::grade::Grade;

/// Arithmetic mean of the scores; `0.0` when there are none.
pub fn average<'a, I>(grades: I) -> f64
where
    I: IntoIterator<Item = &'a Grade>,
{
    let (sum, count) = grades
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), g| (sum + g.score, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Two-decimal rounding for display. Averages are stored unrounded.
pub fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::period::{Period, Semester};

    fn scores(values: &[f64]) -> Vec<Grade> {
        values
            .iter()
            .map(|v| Grade::new("t".to_string(), *v, Period::new(2024, Semester::First)))
            .collect()
    }

    #[test]
    fn test_average_empty_is_zero() {
        let empty: Vec<Grade> = Vec::new();
        assert_eq!(average(&empty), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&scores(&[3.5, 5.5])), 4.5);
        assert_eq!(average(&scores(&[16.0, 15.0, 14.0])), 15.0);
        assert_eq!(average(&scores(&[4.0])), 4.0);
    }

    #[test]
    fn test_average_is_not_rounded() {
        let avg = average(&scores(&[4.0, 4.5, 5.0, 4.0, 6.0, 5.5]));
        assert!((avg - 29.0 / 6.0).abs() < 1e-12);
        assert_eq!(round_for_display(avg), 4.83);
    }
}
