use crate::encoder::tables::alignment_centers;
use crate::encoder::version::symbol_side;
use crate::models::{BitMatrix, Version};

/// Reserved (function) modules for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    /// Build the map of reserved modules for `version`
    pub fn new(version: Version) -> Self {
        let size = symbol_side(version);
        let mut mask = BitMatrix::square(size);

        // Finder patterns + separators (8x8 areas, clipped to bounds)
        Self::mark_finder_area(&mut mask, 0, 0);
        Self::mark_finder_area(&mut mask, size - 7, 0);
        Self::mark_finder_area(&mut mask, 0, size - 7);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        for (cx, cy) in alignment_centers(version) {
            for y in cy - 2..=cy + 2 {
                for x in cx - 2..=cx + 2 {
                    mask.set(x, y, true);
                }
            }
        }

        // Format info strips
        for i in 0..9 {
            mask.set(8, i, true);
            mask.set(i, 8, true);
        }
        for i in 0..8 {
            mask.set(size - 1 - i, 8, true);
            mask.set(8, size - 1 - i, true);
        }

        // Dark module
        mask.set(8, size - 8, true);

        // Version info (v7+)
        if version.number() >= 7 {
            for dy in 0..6 {
                for dx in 0..3 {
                    mask.set(size - 11 + dx, dy, true);
                    mask.set(dy, size - 11 + dx, true);
                }
            }
        }

        Self { mask, version }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Version the map was built for
    pub fn version(&self) -> Version {
        self.version
    }

    /// Check if module (x, y) is reserved
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Number of modules available for codeword bits
    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_dark()
    }

    /// Data module coordinates in placement order: column pairs from the
    /// right edge, skipping the timing column, alternating upward and
    /// downward, right column first within each row.
    pub fn data_positions(&self) -> Vec<(usize, usize)> {
        let size = self.size();
        let mut positions = Vec::with_capacity(self.data_modules_count());
        let mut upward = true;
        let mut col = size as isize - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }
            for step in 0..size {
                let y = if upward { size - 1 - step } else { step };
                for x in [col as usize, col as usize - 1] {
                    if !self.is_function(x, y) {
                        positions.push((x, y));
                    }
                }
            }
            upward = !upward;
            col -= 2;
        }

        positions
    }

    fn mark_finder_area(mask: &mut BitMatrix, x: usize, y: usize) {
        let size = mask.width();
        let start_x = x.saturating_sub(1);
        let start_y = y.saturating_sub(1);
        let end_x = (x + 7 + 1).min(size);
        let end_y = (y + 7 + 1).min(size);
        for yy in start_y..end_y {
            for xx in start_x..end_x {
                mask.set(xx, yy, true);
            }
        }
    }
}
