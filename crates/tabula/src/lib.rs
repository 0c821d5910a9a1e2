//! # Tabula: parse-table grammar artifact loader
//!
//! Tabula validates compiled grammar artifacts against the runtime's
//! expected binary interface and wraps them in an immutable
//! [`Language`] handle for parser construction.
//!
//! ## Design Philosophy
//!
//! - **Gate, not compiler** - grammars are compiled elsewhere; Tabula
//!   only decides whether an artifact is safe to hand to a parser
//! - **Fail fast** - version and structure problems surface at load
//!   time, never at first parse
//! - **Tagged results** - callers branch on [`LoadError`], not on a
//!   generic throwable
//! - **Embeddable** - library first; no I/O, no global state
//!
//! ## Quick Start
//!
//! ```
//! # use tabula::{RawAction, RawGrammar, RawState, SymbolMeta};
//! # const VISIBLE: SymbolMeta = SymbolMeta { visible: true, named: true };
//! # const HIDDEN: SymbolMeta = SymbolMeta { visible: false, named: false };
//! # static GRAMMAR: RawGrammar = RawGrammar {
//! #     name: "example",
//! #     abi_version: 15,
//! #     symbol_count: 3,
//! #     token_count: 2,
//! #     external_token_count: 0,
//! #     symbol_names: &["end", "word", "phrase"],
//! #     symbol_meta: &[HIDDEN, VISIBLE, VISIBLE],
//! #     states: &[
//! #         RawState { actions: &[(1, RawAction::Shift(1))], gotos: &[(2, 1)] },
//! #         RawState {
//! #             actions: &[
//! #                 (0, RawAction::Reduce { symbol: 2, child_count: 1 }),
//! #                 (1, RawAction::Accept),
//! #             ],
//! #             gotos: &[],
//! #         },
//! #     ],
//! # };
//! // GRAMMAR is the static emitted by a grammar compiler
//! let language = tabula::load(&GRAMMAR)?;
//!
//! assert!(language.table_size() > 0);
//! println!("loaded {} (ABI {})", language.name(), language.abi_version());
//! # Ok::<(), tabula::LoadError>(())
//! ```
//!
//! The resulting [`Language`] is immutable and freely shareable across
//! threads; any number of parsers can read the same tables without
//! locking.

mod error;
mod language;
mod loader;
mod raw;

pub use error::{CorruptionKind, LoadError, Result};
pub use language::{Language, LanguageInfo, Symbol};
pub use loader::{ABI_VERSION, MIN_COMPATIBLE_ABI_VERSION, load};
pub use raw::{RawAction, RawGrammar, RawState, SymbolMeta};
