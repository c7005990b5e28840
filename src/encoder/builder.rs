/// Staged construction of the module matrix
use crate::debug::trace_stage;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::tables::{
    FORMAT_POSITIONS_TOP_LEFT, alignment_centers, format_codeword, format_positions_split,
    version_bits,
};
use crate::encoder::version::symbol_side;
use crate::models::{BitMatrix, MaskPattern, Version};

/// Owns the matrix while it is built; steps run in the order
/// function patterns -> data -> mask -> format/version info -> finish.
pub struct SymbolBuilder {
    matrix: BitMatrix,
    func: FunctionMask,
}

impl SymbolBuilder {
    /// Empty (all light) matrix for `version`
    pub fn new(version: Version) -> Self {
        Self {
            matrix: BitMatrix::square(symbol_side(version)),
            func: FunctionMask::new(version),
        }
    }

    /// Version being built
    pub fn version(&self) -> Version {
        self.func.version()
    }

    /// Finder, timing, alignment patterns and the dark module
    pub fn place_function_patterns(mut self) -> Self {
        let size = self.matrix.width();

        self.place_finder(0, 0);
        self.place_finder(size - 7, 0);
        self.place_finder(0, size - 7);

        for i in 8..size - 8 {
            self.matrix.set(i, 6, i % 2 == 0);
            self.matrix.set(6, i, i % 2 == 0);
        }

        for (cx, cy) in alignment_centers(self.version()) {
            self.place_alignment(cx, cy);
        }

        self.matrix.set(8, size - 8, true);
        self
    }

    /// Write `data ++ ec` MSB-first into the free modules in zig-zag order.
    /// Modules past the end of the stream stay light.
    pub fn place_data(mut self, data: &[u8], ec: &[u8]) -> Self {
        let positions = self.func.data_positions();
        let total_bits = (data.len() + ec.len()) * 8;
        let bits = data
            .iter()
            .chain(ec.iter())
            .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1));

        for (&(x, y), bit) in positions.iter().zip(bits) {
            self.matrix.set(x, y, bit);
        }

        if total_bits > positions.len() {
            trace_stage(
                "place_data",
                format_args!("{} bits do not fit in {} modules", total_bits, positions.len()),
            );
        }
        self
    }

    /// XOR the mask over every data module. Function modules (finders,
    /// separators, timing, alignment, format and version areas, dark module)
    /// are excluded so the finder patterns stay intact.
    pub fn apply_mask(mut self, mask: MaskPattern) -> Self {
        let size = self.matrix.width();
        for y in 0..size {
            for x in 0..size {
                if !self.func.is_function(x, y) && mask.is_masked(y, x) {
                    self.matrix.toggle(x, y);
                }
            }
        }
        self
    }

    /// Both copies of the format codeword, written after masking
    pub fn place_format_info(mut self, mask: MaskPattern) -> Self {
        let bits = format_codeword(mask);
        let size = self.matrix.width();
        let split = format_positions_split(size);
        for i in 0..15 {
            let bit = (bits >> i) & 1 == 1;
            let (x, y) = FORMAT_POSITIONS_TOP_LEFT[i];
            self.matrix.set(x, y, bit);
            let (x, y) = split[i];
            self.matrix.set(x, y, bit);
        }
        self
    }

    /// Version information blocks (versions 7+)
    pub fn place_version_info(mut self) -> Self {
        let version = self.version();
        if version.number() < 7 {
            return self;
        }
        let bits = version_bits(version);
        let size = self.matrix.width();
        for i in 0..18 {
            let bit = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            self.matrix.set(a, b, bit);
            self.matrix.set(b, a, bit);
        }
        self
    }

    /// Take the finished matrix
    pub fn finish(self) -> BitMatrix {
        self.matrix
    }

    /// 7x7 finder at top-left corner (x, y) with its clipped light separator
    fn place_finder(&mut self, x: usize, y: usize) {
        for dy in -1..=7isize {
            for dx in -1..=7isize {
                let (Some(xx), Some(yy)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                self.matrix.set(xx, yy, finder_module(dx, dy));
            }
        }
    }

    fn place_alignment(&mut self, cx: usize, cy: usize) {
        for dy in -2..=2isize {
            for dx in -2..=2isize {
                let dark = dx.abs() == 2 || dy.abs() == 2 || (dx == 0 && dy == 0);
                self.matrix
                    .set(cx.wrapping_add_signed(dx), cy.wrapping_add_signed(dy), dark);
            }
        }
    }
}

/// Module of a finder pattern at offset (dx, dy) from its top-left corner;
/// offsets -1 and 7 are the separator.
pub fn finder_module(dx: isize, dy: isize) -> bool {
    let inside = (0..=6).contains(&dx) && (0..=6).contains(&dy);
    let border = dx == 0 || dx == 6 || dy == 0 || dy == 6;
    let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
    inside && (border || core)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).expect("supported version")
    }

    fn assert_finder(matrix: &BitMatrix, x0: usize, y0: usize) {
        for dy in 0..7 {
            for dx in 0..7 {
                assert_eq!(
                    matrix.get(x0 + dx, y0 + dy),
                    finder_module(dx as isize, dy as isize),
                    "finder at ({}, {}) offset ({}, {})",
                    x0,
                    y0,
                    dx,
                    dy
                );
            }
        }
    }

    #[test]
    fn test_finder_module_rings() {
        assert!(finder_module(0, 0));
        assert!(finder_module(6, 3));
        assert!(!finder_module(1, 1));
        assert!(!finder_module(5, 3));
        assert!(finder_module(3, 3));
        assert!(finder_module(2, 4));
        assert!(!finder_module(-1, 3));
        assert!(!finder_module(7, 7));
    }

    #[test]
    fn test_function_patterns() {
        let matrix = SymbolBuilder::new(v(2)).place_function_patterns().finish();
        let size = matrix.width();
        assert_finder(&matrix, 0, 0);
        assert_finder(&matrix, size - 7, 0);
        assert_finder(&matrix, 0, size - 7);

        // Separators
        assert!(!matrix.get(7, 0));
        assert!(!matrix.get(0, 7));
        assert!(!matrix.get(size - 8, 3));
        assert!(!matrix.get(3, size - 8));

        // Timing
        for i in 8..size - 8 {
            assert_eq!(matrix.get(i, 6), i % 2 == 0);
            assert_eq!(matrix.get(6, i), i % 2 == 0);
        }

        // Dark module and alignment pattern at (18, 18)
        assert!(matrix.get(8, size - 8));
        assert!(matrix.get(18, 18));
        assert!(!matrix.get(17, 18));
        assert!(matrix.get(16, 16));
        assert!(matrix.get(20, 18));
    }

    #[test]
    fn test_mask_skips_function_modules() {
        let plain = SymbolBuilder::new(v(1)).place_function_patterns().finish();
        let masked = SymbolBuilder::new(v(1))
            .place_function_patterns()
            .apply_mask(MaskPattern::Pattern0)
            .finish();
        let func = FunctionMask::new(v(1));
        for y in 0..21 {
            for x in 0..21 {
                if func.is_function(x, y) {
                    assert_eq!(plain.get(x, y), masked.get(x, y));
                } else {
                    assert_eq!(masked.get(x, y), (x + y) % 2 == 0);
                }
            }
        }
    }

    #[test]
    fn test_format_info_written_twice() {
        let matrix = SymbolBuilder::new(v(1))
            .place_function_patterns()
            .place_format_info(MaskPattern::Pattern0)
            .finish();
        let split = format_positions_split(21);
        let mut first = 0u16;
        let mut second = 0u16;
        for i in 0..15 {
            let (x, y) = FORMAT_POSITIONS_TOP_LEFT[i];
            first |= (matrix.get(x, y) as u16) << i;
            let (x, y) = split[i];
            second |= (matrix.get(x, y) as u16) << i;
        }
        assert_eq!(first, 0x77C4);
        assert_eq!(second, 0x77C4);
        // Dark module survives the split copy
        assert!(matrix.get(8, 13));
    }

    #[test]
    fn test_matrix_side_per_version() {
        for version in Version::all() {
            let matrix = SymbolBuilder::new(version).finish();
            assert_eq!(matrix.width(), symbol_side(version));
            assert_eq!(matrix.width(), 17 + 4 * version.number() as usize);
        }
    }

    #[test]
    fn test_version_info_blocks() {
        let version = v(7);
        let matrix = SymbolBuilder::new(version).place_version_info().finish();
        let size = version.size();
        let bits = version_bits(version);
        for i in 0..18 {
            let expected = (bits >> i) & 1 == 1;
            assert_eq!(matrix.get(size - 11 + i % 3, i / 3), expected);
            assert_eq!(matrix.get(i / 3, size - 11 + i % 3), expected);
        }
    }

    #[test]
    fn test_data_bits_follow_zigzag() {
        let matrix = SymbolBuilder::new(v(1))
            .place_data(&[0b1010_0000], &[])
            .finish();
        assert!(matrix.get(20, 20));
        assert!(!matrix.get(19, 20));
        assert!(matrix.get(20, 19));
        assert!(!matrix.get(19, 19));
        // Rest of the stream is empty
        assert_eq!(matrix.count_dark(), 2);
    }
}
