//! Render mode detection and configuration
//!
//! Picks between plain ASCII glyphs and Unicode symbols for the field.

use std::env;

use serde::{Deserialize, Serialize};

/// Available rendering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Pick at startup from the terminal's locale
    #[default]
    Auto,
    /// Classic ASCII characters (@ # . etc.)
    Ascii,
    /// Unicode symbols (◆ █ ▒ etc.)
    Unicode,
}

impl RenderMode {
    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Auto => "Auto",
            RenderMode::Ascii => "ASCII",
            RenderMode::Unicode => "Unicode",
        }
    }

    /// Replace `Auto` with whatever the terminal supports
    pub fn resolve(self) -> RenderMode {
        match self {
            RenderMode::Auto => detect_render_mode(),
            mode => mode,
        }
    }

    /// Switch between the two concrete modes
    pub fn toggled(self) -> RenderMode {
        match self.resolve() {
            RenderMode::Unicode => RenderMode::Ascii,
            _ => RenderMode::Unicode,
        }
    }
}

/// Detect the best rendering mode for the current terminal
pub fn detect_render_mode() -> RenderMode {
    if is_unicode_supported() {
        log::info!("Using Unicode rendering mode");
        RenderMode::Unicode
    } else {
        log::info!("Falling back to ASCII rendering mode");
        RenderMode::Ascii
    }
}

/// Check if the locale advertises UTF-8
fn is_unicode_supported() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .any(|value| {
            let value = value.to_uppercase();
            value.contains("UTF-8") || value.contains("UTF8")
        })
}
