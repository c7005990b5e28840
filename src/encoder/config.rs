use crate::models::MaskPattern;
use std::sync::OnceLock;

/// What to do with payloads larger than the biggest supported version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversizePolicy {
    /// Clamp to version 10 and drop bits past its capacity
    #[default]
    Truncate,
    /// Fail with [`crate::EncodeError::PayloadTooLarge`]
    Reject,
}

impl OversizePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truncate" | "lenient" => Some(Self::Truncate),
            "reject" | "strict" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderConfig {
    /// Handling of payloads past [`crate::MAX_PAYLOAD_BYTES`]
    pub oversize: OversizePolicy,
    /// Fixed mask applied to every symbol; there is no penalty scoring
    pub mask: MaskPattern,
}

impl EncoderConfig {
    /// Settings from `QR_OVERSIZE_POLICY` and `QR_MASK_PATTERN`
    pub fn from_env() -> Self {
        Self {
            oversize: oversize_policy(),
            mask: mask_pattern(),
        }
    }

    /// Defaults, but oversized payloads are rejected
    pub fn strict() -> Self {
        Self {
            oversize: OversizePolicy::Reject,
            ..Self::default()
        }
    }

    /// Same settings with a different fixed mask
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = mask;
        self
    }
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

static OVERSIZE_POLICY: OnceLock<OversizePolicy> = OnceLock::new();

pub(crate) fn oversize_policy() -> OversizePolicy {
    *OVERSIZE_POLICY.get_or_init(|| {
        std::env::var("QR_OVERSIZE_POLICY")
            .ok()
            .and_then(|v| OversizePolicy::parse(&v))
            .unwrap_or_default()
    })
}

static MASK_PATTERN: OnceLock<MaskPattern> = OnceLock::new();

pub(crate) fn mask_pattern() -> MaskPattern {
    *MASK_PATTERN
        .get_or_init(|| MaskPattern::from_bits(parse_env_u8("QR_MASK_PATTERN", 0).min(7)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.oversize, OversizePolicy::Truncate);
        assert_eq!(config.mask, MaskPattern::Pattern0);
        assert_eq!(EncoderConfig::strict().oversize, OversizePolicy::Reject);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(OversizePolicy::parse("Reject"), Some(OversizePolicy::Reject));
        assert_eq!(OversizePolicy::parse(" truncate "), Some(OversizePolicy::Truncate));
        assert_eq!(OversizePolicy::parse("strict"), Some(OversizePolicy::Reject));
        assert_eq!(OversizePolicy::parse("sometimes"), None);
    }

    #[test]
    fn test_with_mask() {
        let config = EncoderConfig::strict().with_mask(MaskPattern::Pattern5);
        assert_eq!(config.mask, MaskPattern::Pattern5);
        assert_eq!(config.oversize, OversizePolicy::Reject);
    }
}
