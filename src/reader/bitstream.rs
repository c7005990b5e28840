/// Codeword extraction from a symbol's data modules
use crate::encoder::function_mask::FunctionMask;
use crate::models::{BitMatrix, MaskPattern};

/// Undo the mask on every data module
pub fn unmask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    let size = matrix.width();
    for y in 0..size {
        for x in 0..size {
            if !func.is_function(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Read `count` codewords in placement order (MSB first)
pub fn extract_codewords(matrix: &BitMatrix, func: &FunctionMask, count: usize) -> Vec<u8> {
    func.data_positions()
        .chunks_exact(8)
        .take(count)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &(x, y)| (byte << 1) | matrix.get(x, y) as u8)
        })
        .collect()
}

/// MSB-first reader over a codeword slice
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }

    /// Read up to 16 bits; `None` when the stream is exhausted
    pub fn read(&mut self, count: usize) -> Option<u16> {
        if count > 16 || count > self.remaining() {
            return None;
        }
        let mut value = 0u16;
        for _ in 0..count {
            let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u16::from(bit);
            self.pos += 1;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_unmask_round_trip() {
        let version = Version::new(1).expect("v1");
        let func = FunctionMask::new(version);
        let mut matrix = BitMatrix::square(21);
        matrix.set(10, 10, true);

        unmask(&mut matrix, MaskPattern::Pattern0, &func);
        // (10 + 10) % 2 == 0 is masked
        assert!(!matrix.get(10, 10));
        assert!(matrix.get(11, 10) == ((10 + 11) % 2 == 0));

        unmask(&mut matrix, MaskPattern::Pattern0, &func);
        assert!(matrix.get(10, 10));
        assert_eq!(matrix.count_dark(), 1);
    }

    #[test]
    fn test_extract_codewords_count() {
        let version = Version::new(1).expect("v1");
        let func = FunctionMask::new(version);
        let matrix = BitMatrix::square(21);
        let codewords = extract_codewords(&matrix, &func, 26);
        assert_eq!(codewords, vec![0u8; 26]);
        // Only 26 full codewords exist in version 1
        assert_eq!(extract_codewords(&matrix, &func, 100).len(), 26);
    }

    #[test]
    fn test_bit_reader() {
        let bytes = [0x40, 0x14, 0x10];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read(4), Some(0b0100));
        assert_eq!(reader.read(8), Some(1));
        assert_eq!(reader.read(8), Some(b'A' as u16));
        assert_eq!(reader.remaining(), 4);
        assert_eq!(reader.read(5), None);
        assert_eq!(reader.read(4), Some(0));
    }
}
