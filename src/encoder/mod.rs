//! QR symbol encoding pipeline
//!
//! Text flows forward through five stages with no feedback:
//! - GF(256) arithmetic and generator polynomials
//! - Version selection from the payload length
//! - Byte-mode data codewords with terminator and padding
//! - Reed-Solomon error correction codewords
//! - Matrix assembly: function patterns, zig-zag data, mask, format info

/// Bit stream builder (mode, count, payload, padding)
pub mod bitstream;
/// Staged module matrix construction
pub mod builder;
/// Encoder settings read from the environment
pub mod config;
/// Encoding errors
pub mod error;
/// Reserved (function) module map and data placement order
pub mod function_mask;
/// GF(256) log/exp arithmetic
pub mod gf256;
/// Reed-Solomon encoder
pub mod reed_solomon;
/// Capacity, alignment and format tables
pub mod tables;
/// Version selection
pub mod version;

use crate::debug::trace_stage;
use crate::models::{BitMatrix, ECLevel, MaskPattern, QrSymbol};
use bitstream::build_data_codewords;
use builder::SymbolBuilder;
use config::{EncoderConfig, OversizePolicy};
use error::EncodeError;
use reed_solomon::encode_error_correction;
use version::select_version;

/// Longest payload encoded without loss: the character count field is 8 bits
/// and version 10 leaves room for 271 bytes.
pub const MAX_PAYLOAD_BYTES: usize = 255;

/// QR symbol encoder with a fixed configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with default settings (mask 0, lenient truncation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit settings
    ///
    /// ```
    /// use rust_qr_gen::{EncodeError, Encoder, EncoderConfig};
    ///
    /// let encoder = Encoder::with_config(EncoderConfig::strict());
    /// let err = encoder.encode(&"x".repeat(300)).unwrap_err();
    /// assert_eq!(err, EncodeError::PayloadTooLarge { len: 300, max: 255 });
    /// ```
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Create an encoder configured from the environment
    pub fn from_env() -> Self {
        Self::with_config(EncoderConfig::from_env())
    }

    /// Settings in use
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode UTF-8 text
    pub fn encode(&self, text: &str) -> Result<QrSymbol, EncodeError> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode raw bytes in byte mode
    pub fn encode_bytes(&self, payload: &[u8]) -> Result<QrSymbol, EncodeError> {
        if self.config.oversize == OversizePolicy::Reject && payload.len() > MAX_PAYLOAD_BYTES {
            return Err(EncodeError::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_BYTES,
            });
        }

        Ok(build_symbol(payload, self.config.mask))
    }

    /// Encode text and keep only the module matrix
    pub fn encode_matrix(&self, text: &str) -> Result<BitMatrix, EncodeError> {
        self.encode(text).map(QrSymbol::into_matrix)
    }
}

/// Run the full pipeline for `payload` with a fixed mask. Oversized payloads
/// clamp to the largest version and are truncated at its capacity.
pub fn build_symbol(payload: &[u8], mask: MaskPattern) -> QrSymbol {
    let version = select_version(payload.len());
    let info = tables::capacity(version);
    trace_stage(
        "select_version",
        format_args!(
            "{} bytes -> version {} ({} data, {} ec)",
            payload.len(),
            version.number(),
            info.data_bytes,
            info.ec_bytes
        ),
    );

    let data_codewords = build_data_codewords(payload, version);
    let ec_codewords = encode_error_correction(&data_codewords, info.ec_bytes);
    trace_stage(
        "codewords",
        format_args!("{} data + {} ec", data_codewords.len(), ec_codewords.len()),
    );

    let modules = SymbolBuilder::new(version)
        .place_function_patterns()
        .place_data(&data_codewords, &ec_codewords)
        .apply_mask(mask)
        .place_format_info(mask)
        .place_version_info()
        .finish();
    trace_stage(
        "assemble",
        format_args!("{0}x{0}, mask {1}", modules.width(), mask.id()),
    );

    QrSymbol {
        version,
        error_correction: ECLevel::L,
        mask_pattern: mask,
        data_codewords,
        ec_codewords,
        modules,
    }
}
