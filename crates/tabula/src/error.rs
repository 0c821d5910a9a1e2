//! Error types for grammar artifact loading.
//!
//! Loading can fail in exactly two ways, and both are terminal for the
//! attempt — an artifact will not change between attempts without an
//! external rebuild, so there is no retry path:
//!
//! - **`IncompatibleVersion`**: the artifact targets an ABI outside
//!   the runtime's supported window. Nothing about the tables is
//!   inspected; the version gate runs first.
//! - **`CorruptGrammar`**: the ABI is acceptable but the table
//!   structure fails a sanity check. The [`CorruptionKind`] names the
//!   exact malformation and where it was found.
//!
//! ## Error categorization
//!
//! `CorruptionKind` splits into two families:
//! - Symbol defects: the symbol inventory disagrees with itself
//! - Table defects: a state row references ids outside the artifact

use thiserror::Error;

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Why a grammar artifact was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The artifact targets an ABI version outside the runtime's
    /// supported window.
    #[error("grammar '{name}' targets ABI version {found}, supported range is {min}..={max}")]
    IncompatibleVersion {
        /// Grammar name as declared by the artifact.
        name: &'static str,
        /// ABI version the artifact was compiled against.
        found: u32,
        /// Oldest ABI version the runtime accepts.
        min: u32,
        /// Newest ABI version the runtime accepts.
        max: u32,
    },

    /// The artifact's table structure failed a sanity check.
    #[error("grammar '{name}' is corrupt: {kind}")]
    CorruptGrammar {
        /// Grammar name as declared by the artifact.
        name: &'static str,
        /// The specific malformation.
        kind: CorruptionKind,
    },
}

/// The specific structural defect found in a rejected artifact.
///
/// Ids in the variants refer to the artifact's own id space, so the
/// defect can be located in the generated table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionKind {
    // === Symbol defects ===
    /// `symbol_names` length disagrees with `symbol_count`.
    SymbolNamesMismatch {
        /// Declared symbol count.
        expected: u16,
        /// Actual length of the names table.
        found: usize,
    },

    /// `symbol_meta` length disagrees with `symbol_count`.
    SymbolMetaMismatch {
        /// Declared symbol count.
        expected: u16,
        /// Actual length of the metadata table.
        found: usize,
    },

    /// `token_count` exceeds `symbol_count`.
    TokenCountOutOfRange {
        /// Declared terminal count.
        token_count: u16,
        /// Declared total symbol count.
        symbol_count: u16,
    },

    /// `external_token_count` exceeds `token_count`.
    ExternalCountOutOfRange {
        /// Declared external scanner token count.
        external_count: u16,
        /// Declared terminal count.
        token_count: u16,
    },

    /// A symbol has an empty display name.
    EmptySymbolName {
        /// The offending symbol id.
        symbol: u16,
    },

    // === Table defects ===
    /// The state table has no rows.
    EmptyStateTable,

    /// An action row is keyed by a symbol that is not a terminal.
    LookaheadNotTerminal {
        /// State containing the bad entry.
        state: u16,
        /// The offending lookahead id.
        symbol: u16,
    },

    /// Two action entries in one state share a lookahead.
    DuplicateLookahead {
        /// State containing the duplicate.
        state: u16,
        /// The duplicated lookahead id.
        symbol: u16,
    },

    /// A shift action targets a state past the end of the table.
    ShiftTargetOutOfRange {
        /// State containing the bad shift.
        state: u16,
        /// The out-of-range target state.
        target: u16,
    },

    /// A reduce action produces a symbol that is not a non-terminal.
    ReduceSymbolNotNonterminal {
        /// State containing the bad reduce.
        state: u16,
        /// The offending production symbol.
        symbol: u16,
    },

    /// A goto row is keyed by a symbol that is not a non-terminal.
    GotoSymbolNotNonterminal {
        /// State containing the bad goto.
        state: u16,
        /// The offending goto key.
        symbol: u16,
    },

    /// A goto transition targets a state past the end of the table.
    GotoTargetOutOfRange {
        /// State containing the bad goto.
        state: u16,
        /// The out-of-range target state.
        target: u16,
    },

    /// No state in the table carries an accept action.
    MissingAccept,
}

impl std::fmt::Display for CorruptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SymbolNamesMismatch { expected, found } => {
                write!(f, "symbol name table has {found} entries, expected {expected}")
            }
            Self::SymbolMetaMismatch { expected, found } => {
                write!(f, "symbol metadata table has {found} entries, expected {expected}")
            }
            Self::TokenCountOutOfRange {
                token_count,
                symbol_count,
            } => write!(
                f,
                "token count {token_count} exceeds symbol count {symbol_count}"
            ),
            Self::ExternalCountOutOfRange {
                external_count,
                token_count,
            } => write!(
                f,
                "external token count {external_count} exceeds token count {token_count}"
            ),
            Self::EmptySymbolName { symbol } => {
                write!(f, "symbol {symbol} has an empty name")
            }
            Self::EmptyStateTable => write!(f, "state table is empty"),
            Self::LookaheadNotTerminal { state, symbol } => {
                write!(f, "state {state} has action on non-terminal lookahead {symbol}")
            }
            Self::DuplicateLookahead { state, symbol } => {
                write!(f, "state {state} has duplicate actions on lookahead {symbol}")
            }
            Self::ShiftTargetOutOfRange { state, target } => {
                write!(f, "state {state} shifts to non-existent state {target}")
            }
            Self::ReduceSymbolNotNonterminal { state, symbol } => {
                write!(f, "state {state} reduces to non-production symbol {symbol}")
            }
            Self::GotoSymbolNotNonterminal { state, symbol } => {
                write!(f, "state {state} has goto keyed by terminal {symbol}")
            }
            Self::GotoTargetOutOfRange { state, target } => {
                write!(f, "state {state} goes to non-existent state {target}")
            }
            Self::MissingAccept => write!(f, "no state carries an accept action"),
        }
    }
}

impl CorruptionKind {
    /// Returns `true` if the defect is in the symbol inventory.
    ///
    /// Symbol defects point at the grammar compiler's symbol emission;
    /// the state table was never inspected.
    #[must_use]
    pub fn is_symbol_defect(&self) -> bool {
        matches!(
            self,
            Self::SymbolNamesMismatch { .. }
                | Self::SymbolMetaMismatch { .. }
                | Self::TokenCountOutOfRange { .. }
                | Self::ExternalCountOutOfRange { .. }
                | Self::EmptySymbolName { .. }
        )
    }

    /// Returns `true` if the defect is in the state table itself.
    #[must_use]
    pub fn is_table_defect(&self) -> bool {
        !self.is_symbol_defect()
    }
}
