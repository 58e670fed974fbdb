use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits `grid_height` rows into consecutive bands of `rows_per_unit` rows.
/// The last band takes whatever remains.
#[must_use]
pub fn calculate_work_units(grid_height: u32, rows_per_unit: NonZeroUsize) -> Vec<Range<u32>> {
    let step = u32::try_from(rows_per_unit.get()).unwrap_or(u32::MAX);

    (0..grid_height)
        .step_by(step as usize)
        .map(|top| top..top.saturating_add(step).min(grid_height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_one_row_per_unit() {
        assert_eq!(calculate_work_units(3, rows(1)), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_last_unit_takes_remainder() {
        assert_eq!(calculate_work_units(10, rows(4)), vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_unit_larger_than_grid() {
        assert_eq!(calculate_work_units(5, rows(64)), vec![0..5]);
    }

    #[test]
    fn test_empty_grid_has_no_units() {
        assert!(calculate_work_units(0, rows(2)).is_empty());
    }

    #[test]
    fn test_units_cover_every_row_once() {
        let units = calculate_work_units(97, rows(7));
        let covered: Vec<u32> = units.into_iter().flatten().collect();

        assert_eq!(covered, (0..97).collect::<Vec<_>>());
    }
}
