use std::num::NonZeroUsize;

use thiserror::Error;

pub const DEFAULT_INITIAL_LEVEL: u32 = 16;
pub const DEFAULT_ROWS_PER_WORK_UNIT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderConfigError {
    #[error("initial sampling level must be at least 1")]
    ZeroInitialLevel,
    #[error("work units must contain at least one row")]
    ZeroRowsPerWorkUnit,
}

/// Engine tunables. None of these change the final image, only how quickly
/// and how smoothly it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Sampling stride of the first pass. Each following pass halves it.
    pub initial_level: u32,
    /// Grid rows computed by one task on the worker pool.
    pub rows_per_work_unit: usize,
    /// Worker threads; `None` uses the available hardware parallelism.
    pub pool_size: Option<NonZeroUsize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_level: DEFAULT_INITIAL_LEVEL,
            rows_per_work_unit: DEFAULT_ROWS_PER_WORK_UNIT,
            pool_size: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderConfigError> {
        if self.initial_level == 0 {
            return Err(RenderConfigError::ZeroInitialLevel);
        }

        if self.rows_per_work_unit == 0 {
            return Err(RenderConfigError::ZeroRowsPerWorkUnit);
        }

        Ok(())
    }

    #[must_use]
    pub fn resolved_pool_size(&self) -> usize {
        self.pool_size
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }

    /// Strides of every pass, coarse to fine, always ending at 1.
    #[must_use]
    pub fn levels(&self) -> Vec<u32> {
        let mut levels = Vec::new();
        let mut level = self.initial_level.max(1);

        loop {
            levels.push(level);
            if level == 1 {
                return levels;
            }
            level /= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_levels() {
        assert_eq!(RenderConfig::default().levels(), vec![16, 8, 4, 2, 1]);
    }

    #[test]
    fn test_non_power_of_two_levels_still_end_at_one() {
        let config = RenderConfig {
            initial_level: 12,
            ..RenderConfig::default()
        };

        assert_eq!(config.levels(), vec![12, 6, 3, 1]);
    }

    #[test]
    fn test_single_pass() {
        let config = RenderConfig {
            initial_level: 1,
            ..RenderConfig::default()
        };

        assert_eq!(config.levels(), vec![1]);
    }

    #[test]
    fn test_validation_errors() {
        let zero_level = RenderConfig {
            initial_level: 0,
            ..RenderConfig::default()
        };
        let zero_rows = RenderConfig {
            rows_per_work_unit: 0,
            ..RenderConfig::default()
        };

        assert_eq!(zero_level.validate(), Err(RenderConfigError::ZeroInitialLevel));
        assert_eq!(zero_rows.validate(), Err(RenderConfigError::ZeroRowsPerWorkUnit));
    }

    #[test]
    fn test_explicit_pool_size_wins() {
        let config = RenderConfig {
            pool_size: NonZeroUsize::new(3),
            ..RenderConfig::default()
        };

        assert_eq!(config.resolved_pool_size(), 3);
        assert!(RenderConfig::default().resolved_pool_size() >= 1);
    }
}
