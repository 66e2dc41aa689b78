//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//!
//! All output goes to stderr so stdout stays clean for JSON.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "validated {} sections", count);
//! debug!("routes"; "{} routes", table.len());
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Force colors on or off; `None` leaves detection to owo-colors.
pub fn set_color(enabled: Option<bool>) {
    match enabled {
        Some(on) => owo_colors::set_override(on),
        None => owo_colors::unset_override(),
    }
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let mut stderr = stderr().lock();
    writeln!(stderr, "{}", line(module, message)).ok();
    stderr.flush().ok();
}

fn line(module: &str, message: &str) -> String {
    let module_lower = module.to_ascii_lowercase();
    format!("{} {}", colorize_prefix(module, &module_lower), message)
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_yellow().bold().to_string(),
        "check" | "resolve" | "init" => prefix.bright_green().bold().to_string(),
        "routes" | "links" => prefix.bright_blue().bold().to_string(),
        _ => prefix.bright_cyan().bold().to_string(),
    }
}
