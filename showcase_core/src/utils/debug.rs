//! Debug output gated on the `DEVSHOWCASE_DEBUG` environment variable
//!
//! ```rust,ignore
//! use showcase_core::debug_module;
//!
//! debug_module!("RELAY", "Sending template {}", template_id);
//! ```

use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled (`DEVSHOWCASE_DEBUG=1` or `true`).
///
/// The variable is read once and cached.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("DEVSHOWCASE_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

/// Debug print with module prefix, to stderr and the log file.
#[inline]
pub fn debug_print_module(module: &str, msg: &str) {
    if is_debug_enabled() {
        eprintln!("[{}] {}", module, msg);
        crate::utils::logger::debug(&format!("[{}] {}", module, msg));
    }
}

/// Performance timing helper for debugging slow operations
pub struct DebugTimer {
    name: String,
    start: std::time::Instant,
    enabled: bool,
}

impl DebugTimer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: std::time::Instant::now(),
            enabled: is_debug_enabled(),
        }
    }

    /// Complete the timer and log the total duration
    pub fn finish(self) {
        if self.enabled {
            debug_print_module(
                "PERF",
                &format!("{} completed in {:?}", self.name, self.start.elapsed()),
            );
        }
    }
}

/// Debug print macro with module prefix
///
/// ```rust,ignore
/// debug_module!("FORM", "Validation failed on {} fields", count);
/// ```
#[macro_export]
macro_rules! debug_module {
    ($module:expr, $($arg:tt)*) => {
        if $crate::utils::debug::is_debug_enabled() {
            $crate::utils::debug::debug_print_module($module, &format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_print_no_panic() {
        debug_print_module("TEST", "Module message");
    }

    #[test]
    fn test_debug_timer() {
        let timer = DebugTimer::new("relay_dispatch");
        timer.finish();
    }

    #[test]
    fn test_macro_compiles() {
        debug_module!("TEST", "Formatted: {}", 42);
    }
}
