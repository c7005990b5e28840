/// Packed module matrix
pub mod matrix;
/// Version, EC level, mask and encoded symbol types
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MAX_VERSION, MIN_VERSION, MaskPattern, QrSymbol, Version};
