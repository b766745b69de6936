//! Process-wide switch for diagnostic warnings.
//!
//! Warnings are emitted through the `log` facade, so a binary still has to
//! install a logger to see them. The switch only decides whether this crate
//! produces them at all; no tree operation reads it for anything else.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING: AtomicBool = AtomicBool::new(false);

/// Enables or disables diagnostic warnings for every tree in the process.
pub fn set_logging(enabled: bool) {
    LOGGING.store(enabled, Ordering::Relaxed);
}

pub fn logging_enabled() -> bool {
    LOGGING.load(Ordering::Relaxed)
}

/// `log::warn!` that stays silent unless [`set_logging`] turned warnings on.
macro_rules! diag_warn {
    ($($arg:tt)+) => {
        if $crate::diagnostics::logging_enabled() {
            log::warn!(target: "balanced_forest", $($arg)+);
        }
    };
}

pub(crate) use diag_warn;
