use crate::models::{MaskPattern, Version};

/// Codeword budget for one version at error correction level L
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    /// Data codewords
    pub data_bytes: usize,
    /// Error correction codewords
    pub ec_bytes: usize,
    /// Block count of the full standard; encoding here is single-block
    pub block_hint: usize,
}

const fn cap(data_bytes: usize, ec_bytes: usize, block_hint: usize) -> CapacityInfo {
    CapacityInfo {
        data_bytes,
        ec_bytes,
        block_hint,
    }
}

// Index: version - 1. Single-block approximation of the level L tables.
const CAPACITY: [CapacityInfo; 10] = [
    cap(19, 7, 1),
    cap(34, 10, 1),
    cap(55, 15, 1),
    cap(80, 20, 2),
    cap(108, 26, 2),
    cap(136, 18, 4),
    cap(156, 20, 4),
    cap(194, 24, 2),
    cap(232, 30, 2),
    cap(274, 18, 4),
];

/// Codeword budget for `version`
pub fn capacity(version: Version) -> CapacityInfo {
    CAPACITY[version.number() as usize - 1]
}

// Index: version - 1
const ALIGNMENT_POSITIONS: [&[usize]; 10] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

/// Alignment pattern center coordinates (used for both rows and columns)
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}

/// Alignment centers actually drawn: every pair except the finder corners.
pub fn alignment_centers(version: Version) -> Vec<(usize, usize)> {
    let positions = alignment_pattern_positions(version);
    let Some(&last) = positions.last() else {
        return Vec::new();
    };
    let mut centers = Vec::new();
    for &cy in positions {
        for &cx in positions {
            let in_tl = cx == 6 && cy == 6;
            let in_tr = cx == last && cy == 6;
            let in_bl = cx == 6 && cy == last;
            if !(in_tl || in_tr || in_bl) {
                centers.push((cx, cy));
            }
        }
    }
    centers
}

/// 15-bit format codewords for level L, indexed by mask id
pub const FORMAT_INFO_L: [u16; 8] = [
    0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976,
];

/// Masked 15-bit format word for level L and `mask`
pub fn format_codeword(mask: MaskPattern) -> u16 {
    FORMAT_INFO_L[mask.id() as usize]
}

/// (x, y) of format bit `i` around the top-left finder
pub const FORMAT_POSITIONS_TOP_LEFT: [(usize, usize); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

/// (x, y) of format bit `i` in the copy split between the top-right and
/// bottom-left finders
pub fn format_positions_split(size: usize) -> [(usize, usize); 15] {
    let mut positions = [(0, 0); 15];
    for (i, pos) in positions.iter_mut().enumerate() {
        *pos = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
    }
    positions
}

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0x537;
/// XOR applied to format words so they are never all zero
pub const FORMAT_XOR_MASK: u16 = 0x5412;

/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0x1F25;

/// Remainder of `data << ecc_bits` modulo `generator`
pub fn bch_remainder(data: u32, ecc_bits: u32, generator: u32) -> u32 {
    let mut rem = data;
    for _ in 0..ecc_bits {
        rem = (rem << 1) ^ (((rem >> (ecc_bits - 1)) & 1) * generator);
    }
    rem & ((1 << ecc_bits) - 1)
}

/// 15-bit format word for a 5-bit payload (EC level bits + mask id)
pub fn format_bits(data: u8) -> u16 {
    let data = u32::from(data & 0x1F);
    let rem = bch_remainder(data, 10, FORMAT_GENERATOR);
    (((data << 10) | rem) as u16) ^ FORMAT_XOR_MASK
}

/// 18-bit version information word (versions 7+)
pub fn version_bits(version: Version) -> u32 {
    let v = u32::from(version.number());
    (v << 12) | bch_remainder(v, 12, VERSION_GENERATOR)
}
