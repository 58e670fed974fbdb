use crate::core::data::colour::Colour;

/// Colours computed by the previous, coarser pass of a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PassCache {
    level: u32,
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl PassCache {
    #[must_use]
    pub fn new(level: u32, width: u32, height: u32, pixels: Vec<Colour>) -> Self {
        Self {
            level,
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Colour already computed for grid cell `(x, y)` of a pass at `level`.
    ///
    /// Only a cache from stride exactly `2 * level` lines up with the finer
    /// grid, and only on even coordinates.
    #[inline]
    #[must_use]
    pub fn lookup(&self, x: u32, y: u32, level: u32) -> Option<Colour> {
        if level.checked_mul(2) != Some(self.level) || x % 2 != 0 || y % 2 != 0 {
            return None;
        }

        let (cached_x, cached_y) = (x / 2, y / 2);
        if cached_x >= self.width || cached_y >= self.height {
            return None;
        }

        self.pixels
            .get(cached_y as usize * self.width as usize + cached_x as usize)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> PassCache {
        // 2x2 grid from a stride-8 pass
        PassCache::new(
            8,
            2,
            2,
            vec![
                Colour::opaque(1, 0, 0),
                Colour::opaque(2, 0, 0),
                Colour::opaque(3, 0, 0),
                Colour::opaque(4, 0, 0),
            ],
        )
    }

    #[test]
    fn test_even_cells_hit() {
        let cache = cache();

        assert_eq!(cache.lookup(0, 0, 4), Some(Colour::opaque(1, 0, 0)));
        assert_eq!(cache.lookup(2, 0, 4), Some(Colour::opaque(2, 0, 0)));
        assert_eq!(cache.lookup(0, 2, 4), Some(Colour::opaque(3, 0, 0)));
        assert_eq!(cache.lookup(2, 2, 4), Some(Colour::opaque(4, 0, 0)));
    }

    #[test]
    fn test_odd_cells_miss() {
        let cache = cache();

        assert_eq!(cache.lookup(1, 0, 4), None);
        assert_eq!(cache.lookup(0, 3, 4), None);
    }

    #[test]
    fn test_cells_beyond_cached_grid_miss() {
        // the finer grid can be one cell wider than twice the coarse one
        assert_eq!(cache().lookup(4, 0, 4), None);
        assert_eq!(cache().lookup(0, 4, 4), None);
    }

    #[test]
    fn test_non_doubling_levels_miss() {
        let cache = cache();

        assert_eq!(cache.lookup(0, 0, 2), None);
        assert_eq!(cache.lookup(0, 0, 8), None);
        assert_eq!(cache.lookup(0, 0, u32::MAX), None);
    }
}
