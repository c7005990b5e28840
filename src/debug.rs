use std::fmt::Display;
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Diagnostics switch, set by the `QR_DEBUG` environment variable
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

/// Print one pipeline stage line to stderr when diagnostics are on
pub(crate) fn trace_stage(stage: &str, detail: impl Display) {
    if debug_enabled() {
        eprintln!("[DEBUG] {}: {}", stage, detail);
    }
}
