//! Symbol reader used to check encoder output
//!
//! Works on clean module matrices (no image detection): reads the format
//! information, removes the mask, walks the zig-zag data order, checks the
//! Reed-Solomon syndromes and parses the byte-mode segment.

/// Data module extraction and unmasking
pub mod bitstream;
/// Format information decoding (EC level, mask pattern)
pub mod format;

use crate::encoder::bitstream::MODE_BYTE;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::reed_solomon::syndromes;
use crate::encoder::tables::capacity;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};
use bitstream::{BitReader, extract_codewords, unmask};
use format::FormatInfo;
use thiserror::Error;

/// Reasons a matrix cannot be read back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Width and height differ
    #[error("matrix is {width}x{height}, expected a square symbol")]
    NotSquare {
        /// Columns in the matrix
        width: usize,
        /// Rows in the matrix
        height: usize,
    },
    /// Side is not 17 + 4 * version for a version 1-10
    #[error("side of {0} modules is not a supported version")]
    UnsupportedSize(usize),
    /// Neither format copy decodes
    #[error("format information is unreadable")]
    FormatInfo,
    /// Format info names a level other than L
    #[error("error correction level {0:?} is not supported")]
    UnsupportedEcLevel(ECLevel),
    /// Nonzero Reed-Solomon syndromes
    #[error("Reed-Solomon check failed")]
    Checksum,
    /// Segment mode indicator other than byte mode
    #[error("segment mode {0:#06b} is not byte mode")]
    UnsupportedMode(u8),
    /// Character count runs past the data codewords
    #[error("segment declares {declared} bytes but only {available} are present")]
    Truncated {
        /// Bytes announced by the count field
        declared: usize,
        /// Whole bytes left after the header
        available: usize,
    },
}

/// Content recovered from a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Version inferred from the matrix side
    pub version: Version,
    /// Level from the format information
    pub ec_level: ECLevel,
    /// Mask from the format information
    pub mask: MaskPattern,
    /// Raw byte-mode payload
    pub payload: Vec<u8>,
}

impl DecodedSymbol {
    /// Payload as UTF-8, `None` for binary payloads
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Read the payload back out of an encoded module matrix
pub fn read_symbol(matrix: &BitMatrix) -> Result<DecodedSymbol, ReadError> {
    if !matrix.is_square() {
        return Err(ReadError::NotSquare {
            width: matrix.width(),
            height: matrix.height(),
        });
    }
    let size = matrix.width();
    let version = Version::from_size(size).ok_or(ReadError::UnsupportedSize(size))?;

    let format = FormatInfo::extract(matrix).ok_or(ReadError::FormatInfo)?;
    if format.ec_level != ECLevel::L {
        return Err(ReadError::UnsupportedEcLevel(format.ec_level));
    }

    let func = FunctionMask::new(version);
    let mut unmasked = matrix.clone();
    unmask(&mut unmasked, format.mask_pattern, &func);

    let info = capacity(version);
    let codewords = extract_codewords(&unmasked, &func, info.data_bytes + info.ec_bytes);
    if syndromes(&codewords, info.ec_bytes).iter().any(|&s| s != 0) {
        return Err(ReadError::Checksum);
    }

    let payload = parse_byte_segment(&codewords[..info.data_bytes])?;
    Ok(DecodedSymbol {
        version,
        ec_level: format.ec_level,
        mask: format.mask_pattern,
        payload,
    })
}

/// Parse the single byte-mode segment at the start of the data codewords
pub fn parse_byte_segment(data: &[u8]) -> Result<Vec<u8>, ReadError> {
    let mut reader = BitReader::new(data);
    let mode = reader.read(4).ok_or(ReadError::Truncated {
        declared: 0,
        available: 0,
    })? as u8;
    if mode != MODE_BYTE {
        return Err(ReadError::UnsupportedMode(mode));
    }
    let declared = reader.read(8).ok_or(ReadError::Truncated {
        declared: 0,
        available: 0,
    })? as usize;

    let available = reader.remaining() / 8;
    if declared > available {
        return Err(ReadError::Truncated {
            declared,
            available,
        });
    }
    (0..declared)
        .map(|_| reader.read(8).map(|b| b as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or(ReadError::Truncated {
            declared,
            available,
        })
}
