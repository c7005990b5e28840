//! Format information extraction from an encoded symbol
use crate::encoder::tables::{FORMAT_POSITIONS_TOP_LEFT, format_bits, format_positions_split};
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// BCH(15,5) corrects up to 3 bit errors
const MAX_FORMAT_ERRORS: u32 = 3;

/// Format info is 15 bits (5 data + 10 ECC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask pattern applied to the data modules
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Decode the copy around the top-left finder, falling back to the split copy
    pub fn extract(matrix: &BitMatrix) -> Option<Self> {
        let primary = read_bits(matrix, &FORMAT_POSITIONS_TOP_LEFT);
        Self::decode(primary).or_else(|| {
            let split = format_positions_split(matrix.width());
            Self::decode(read_bits(matrix, &split))
        })
    }

    /// Nearest valid format word within the correctable distance
    pub fn decode(word: u16) -> Option<Self> {
        let (data, distance) = (0u8..32)
            .map(|data| (data, (format_bits(data) ^ word).count_ones()))
            .min_by_key(|&(_, distance)| distance)?;
        if distance > MAX_FORMAT_ERRORS {
            return None;
        }
        Some(Self {
            ec_level: ECLevel::from_bits(data >> 3),
            mask_pattern: MaskPattern::from_bits(data),
        })
    }
}

/// Bit `i` of the result is the module at `positions[i]`
pub fn read_bits(matrix: &BitMatrix, positions: &[(usize, usize)]) -> u16 {
    positions
        .iter()
        .enumerate()
        .fold(0u16, |word, (i, &(x, y))| word | ((matrix.get(x, y) as u16) << i))
}
