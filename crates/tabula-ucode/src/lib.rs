//! # ucode grammar for Tabula
//!
//! This crate ships the compiled parse tables for ucode, the embedded
//! scripting language used by OpenWrt's configuration layer. The
//! grammar covers the JavaScript-like surface: statements,
//! declarations, functions and arrow functions, member/subscript/call
//! chains, and object and array literals, with automatic semicolons,
//! template string chunks, and the ternary `?` supplied by an external
//! scanner.
//!
//! ## Quick Start
//!
//! ```
//! let language = tabula_ucode::language()?;
//!
//! assert_eq!(language.name(), "ucode");
//! assert!(language.table_size() > 0);
//! # Ok::<(), tabula::LoadError>(())
//! ```

mod grammar;

pub use grammar::GRAMMAR;

use tabula::{Language, Result};

/// Load the ucode grammar through the runtime's validation gate.
///
/// # Errors
///
/// Returns the loader's error if this crate's tables were built
/// against an ABI the linked runtime no longer supports, or if the
/// artifact fails the structural checks.
pub fn language() -> Result<Language> {
    tabula::load(&GRAMMAR)
}
