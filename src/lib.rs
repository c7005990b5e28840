//! RustQR Gen - small QR code symbol generator
//!
//! Turns short text (wallet identifiers, links) into a QR module matrix using
//! byte mode, error correction level L and versions 1-10. GF(256) arithmetic,
//! Reed-Solomon coding, module placement and masking are implemented here
//! without external QR libraries.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline (bit stream, Reed-Solomon, matrix assembly)
pub mod encoder;
/// Core data structures (BitMatrix, QrSymbol, Version, etc.)
pub mod models;
/// Reads encoded matrices back (format info, codewords, payload)
pub mod reader;
/// PNG, SVG and terminal rendering
pub mod render;

mod debug;

pub use encoder::config::{EncoderConfig, OversizePolicy};
pub use encoder::error::EncodeError;
pub use encoder::{Encoder, MAX_PAYLOAD_BYTES};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrSymbol, Version};
pub use reader::{DecodedSymbol, ReadError, read_symbol};

use rayon::prelude::*;

/// Encode `text` into a QR module matrix (true = dark)
///
/// The matrix is square with side `17 + 4 * version`, where the version is
/// the smallest of 1-10 that holds the UTF-8 bytes of `text`. Mask pattern 0
/// is always used.
///
/// Never fails: text longer than version 10 can hold is cut off at its
/// capacity and the character count keeps only its low 8 bits. Use
/// [`Encoder::with_config`] with [`EncoderConfig::strict`] to get
/// [`EncodeError::PayloadTooLarge`] instead.
///
/// # Example
/// ```
/// let matrix = rust_qr_gen::generate_symbol_matrix("A");
/// assert_eq!(matrix.width(), 21);
/// assert!(matrix.get(0, 0));
/// ```
pub fn generate_symbol_matrix(text: &str) -> BitMatrix {
    encoder::build_symbol(text.as_bytes(), MaskPattern::Pattern0).into_matrix()
}

/// Encode many texts in parallel; output order matches input order
pub fn encode_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<BitMatrix> {
    texts
        .par_iter()
        .map(|text| generate_symbol_matrix(text.as_ref()))
        .collect()
}
