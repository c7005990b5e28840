use thiserror::Error;

/// Encoding failures; only raised under [`crate::encoder::config::OversizePolicy::Reject`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload does not fit the 8-bit character count
    #[error("payload of {len} bytes exceeds the {max}-byte limit")]
    PayloadTooLarge {
        /// Payload length in bytes
        len: usize,
        /// Largest accepted length
        max: usize,
    },
}
