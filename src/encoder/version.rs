/// Version selection from payload length
use crate::encoder::tables::capacity;
use crate::models::Version;

/// Mode indicator, character count and terminator, rounded up to bytes
pub const SEGMENT_OVERHEAD_BYTES: usize = 3;

/// Smallest version whose data capacity holds the payload plus overhead.
///
/// Payloads that fit nowhere clamp to the largest version; callers decide
/// whether that is acceptable (see [`crate::encoder::config::OversizePolicy`]).
pub fn select_version(payload_len: usize) -> Version {
    Version::all()
        .find(|&v| fits(payload_len, v))
        .unwrap_or_else(Version::max)
}

/// True when `payload_len` bytes fit in `version` without truncation
pub fn fits(payload_len: usize, version: Version) -> bool {
    payload_len + SEGMENT_OVERHEAD_BYTES <= capacity(version).data_bytes
}

/// Side length in modules of a `version` symbol: 17 + 4 * version
pub fn symbol_side(version: Version) -> usize {
    17 + 4 * version.number() as usize
}
