//! # ethiopic-core
//!
//! Foundational types shared across the ethiopic-rs workspace — the error
//! enum, the `Result` alias, the `ensure!` / `fail!` macros, and the global
//! [`Settings`] singleton that lets tests pin "today" to a fixed date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (evaluation date override).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
