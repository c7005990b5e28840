use super::BitMatrix;

/// Smallest supported symbol version
pub const MIN_VERSION: u8 = 1;
/// Largest supported symbol version
pub const MAX_VERSION: u8 = 10;

/// QR Code version (1-10 in this encoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Create a version, `None` outside 1..=10
    pub fn new(number: u8) -> Option<Self> {
        (MIN_VERSION..=MAX_VERSION)
            .contains(&number)
            .then_some(Self(number))
    }

    /// Version with the largest capacity
    pub const fn max() -> Self {
        Self(MAX_VERSION)
    }

    /// Infer the version from a symbol side length
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || (size - 17) % 4 != 0 {
            return None;
        }
        u8::try_from((size - 17) / 4).ok().and_then(Self::new)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// All supported versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (MIN_VERSION..=MAX_VERSION).map(Version)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Get error correction level from format bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// Two-bit indicator stored in the format information
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    #[default]
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from its three-bit id
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MaskPattern::Pattern0,
            1 => MaskPattern::Pattern1,
            2 => MaskPattern::Pattern2,
            3 => MaskPattern::Pattern3,
            4 => MaskPattern::Pattern4,
            5 => MaskPattern::Pattern5,
            6 => MaskPattern::Pattern6,
            _ => MaskPattern::Pattern7,
        }
    }

    /// Mask id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` is flipped by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR symbol
#[derive(Debug, Clone)]
pub struct QrSymbol {
    /// Selected version
    pub version: Version,
    /// Error correction level (always L)
    pub error_correction: ECLevel,
    /// Mask pattern applied to the data modules
    pub mask_pattern: MaskPattern,
    /// Data codewords, exactly the version's data capacity
    pub data_codewords: Vec<u8>,
    /// Reed-Solomon codewords appended after the data
    pub ec_codewords: Vec<u8>,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
}

impl QrSymbol {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Consume the symbol and keep only the modules
    pub fn into_matrix(self) -> BitMatrix {
        self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).map(|v| v.size()), Some(21));
        assert_eq!(Version::new(2).map(|v| v.size()), Some(25));
        assert_eq!(Version::max().size(), 57);
        assert!(Version::new(0).is_none());
        assert!(Version::new(11).is_none());
    }

    #[test]
    fn test_version_from_size() {
        assert_eq!(Version::from_size(21), Version::new(1));
        assert_eq!(Version::from_size(57), Version::new(10));
        assert_eq!(Version::from_size(22), None);
        assert_eq!(Version::from_size(61), None);
        assert_eq!(Version::from_size(0), None);
    }

    #[test]
    fn test_ec_level() {
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            assert_eq!(ECLevel::from_bits(level.format_bits()), level);
        }
        assert_eq!(ECLevel::from_bits(0b01), ECLevel::L);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::default();
        assert_eq!(mask, MaskPattern::Pattern0);
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));
        for id in 0..8 {
            assert_eq!(MaskPattern::from_bits(id).id(), id);
        }
    }
}
