/// Data codeword construction (byte mode only)
use crate::encoder::tables::capacity;
use crate::models::Version;

/// Byte mode indicator
pub const MODE_BYTE: u8 = 0b0100;
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// MSB-first bit buffer with a hard capacity; bits past it are dropped.
struct BitWriter {
    bits: Vec<bool>,
    capacity: usize,
}

impl BitWriter {
    fn new(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn remaining(&self) -> usize {
        self.capacity - self.bits.len()
    }

    fn push(&mut self, bit: bool) {
        if self.bits.len() < self.capacity {
            self.bits.push(bit);
        }
    }

    fn write(&mut self, value: u32, count: usize) {
        for i in (0..count).rev() {
            self.push((value >> i) & 1 == 1);
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Build exactly `data_bytes(version)` data codewords for `payload`.
///
/// The character count is written in 8 bits and payload bits beyond the
/// version's capacity are dropped.
pub fn build_data_codewords(payload: &[u8], version: Version) -> Vec<u8> {
    let data_bytes = capacity(version).data_bytes;
    let mut writer = BitWriter::new(data_bytes * 8);

    writer.write(u32::from(MODE_BYTE), 4);
    writer.write((payload.len() & 0xFF) as u32, 8);
    for &byte in payload {
        writer.write(u32::from(byte), 8);
    }

    // Terminator, only as much as fits
    let terminator = writer.remaining().min(4);
    writer.write(0, terminator);

    let to_boundary = (8 - writer.bits.len() % 8) % 8;
    writer.write(0, to_boundary);

    for &pad in PAD_BYTES.iter().cycle() {
        if writer.remaining() == 0 {
            break;
        }
        writer.write(u32::from(pad), 8);
    }

    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).expect("supported version")
    }

    #[test]
    fn test_single_byte_payload() {
        let codewords = build_data_codewords(b"A", v(1));
        assert_eq!(codewords.len(), 19);
        // 0100 00000001 01000001 0000 -> 0x40 0x14 0x10
        assert_eq!(&codewords[..3], &[0x40, 0x14, 0x10]);
        assert_eq!(&codewords[3..7], &[0xEC, 0x11, 0xEC, 0x11]);
        assert_eq!(codewords[18], 0x11);
    }

    #[test]
    fn test_empty_payload() {
        let codewords = build_data_codewords(b"", v(1));
        assert_eq!(codewords.len(), 19);
        // 0100 00000000 0000 -> 0x40 0x00
        assert_eq!(&codewords[..3], &[0x40, 0x00, 0xEC]);
    }

    #[test]
    fn test_payload_filling_version_one() {
        // 16 bytes: 4 + 8 + 128 + 4 = 144 bits = 18 bytes, one pad byte
        let payload = [0xFFu8; 16];
        let codewords = build_data_codewords(&payload, v(1));
        assert_eq!(codewords.len(), 19);
        assert_eq!(codewords[0], 0x41);
        assert_eq!(codewords[17], 0xF0);
        assert_eq!(codewords[18], 0xEC);
    }

    #[test]
    fn test_oversized_payload_is_truncated() {
        let payload = vec![0xAAu8; 300];
        let codewords = build_data_codewords(&payload, v(10));
        assert_eq!(codewords.len(), 274);
        // Count field holds 300 truncated to 8 bits
        assert_eq!(codewords[0], 0x40 | ((300 & 0xFF) >> 4) as u8);
        assert!(!codewords.contains(&0xEC));
    }

    #[test]
    fn test_partial_terminator() {
        // 17 bytes in version 1: 4 + 8 + 136 = 148 bits, 4 bits left
        let payload = [0xFFu8; 17];
        let codewords = build_data_codewords(&payload, v(1));
        assert_eq!(codewords.len(), 19);
        assert_eq!(codewords[17], 0xFF);
        assert_eq!(codewords[18], 0xF0);
    }
}
