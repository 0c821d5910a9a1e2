//! Raw layout of a compiled grammar artifact.
//!
//! A grammar compiler emits these tables as a `static` in a generated
//! module; the structs here describe the layout the runtime expects.
//! Nothing in this module is validated — [`crate::load`] is the only
//! gate between a raw artifact and a usable [`crate::Language`].
//!
//! ## Layout
//!
//! Symbol ids are dense: `0..token_count` are terminals (id 0 is the
//! reserved end-of-input marker), `token_count..symbol_count` are
//! non-terminals. `symbol_names` and `symbol_meta` are parallel to the
//! id space. `states` holds one row per parser state, state 0 being
//! the start state.

use serde::{Deserialize, Serialize};

/// A compiled grammar artifact: parse tables plus symbol metadata,
/// tagged with the ABI version the grammar compiler targeted.
///
/// All fields are plain data so generated table modules can construct
/// the whole artifact in a `static`. Instances are immutable for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy)]
pub struct RawGrammar {
    /// Grammar name, e.g. `"ucode"`.
    pub name: &'static str,
    /// ABI version this artifact was compiled against.
    pub abi_version: u32,
    /// Total number of symbols. Valid ids are `0..symbol_count`.
    pub symbol_count: u16,
    /// Number of terminal symbols. Terminal ids are `0..token_count`.
    pub token_count: u16,
    /// How many of the terminals are produced by an external scanner.
    pub external_token_count: u16,
    /// Symbol display names, indexed by symbol id.
    pub symbol_names: &'static [&'static str],
    /// Per-symbol visibility flags, indexed by symbol id.
    pub symbol_meta: &'static [SymbolMeta],
    /// Parser state rows. State 0 is the start state.
    pub states: &'static [RawState],
}

/// Visibility flags for one symbol.
///
/// Hidden rules (underscore-prefixed in the grammar definition) are
/// neither visible nor named; anonymous keyword and punctuation tokens
/// are visible but not named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMeta {
    /// Whether the symbol appears in syntax trees at all.
    pub visible: bool,
    /// Whether the symbol has a rule name (as opposed to a literal).
    pub named: bool,
}

/// One parser state: terminal-lookahead actions plus non-terminal
/// goto transitions.
#[derive(Debug, Clone, Copy)]
pub struct RawState {
    /// `(lookahead terminal, action)` entries for this state.
    pub actions: &'static [(u16, RawAction)],
    /// `(non-terminal, target state)` transitions taken after a
    /// reduction.
    pub gotos: &'static [(u16, u16)],
}

/// A single parse action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawAction {
    /// Consume the lookahead and move to the given state.
    Shift(u16),
    /// Pop `child_count` entries and produce the given non-terminal.
    Reduce {
        /// Non-terminal produced by the reduction.
        symbol: u16,
        /// Number of children consumed from the stack.
        child_count: u8,
    },
    /// Parse completed successfully.
    Accept,
}

impl RawGrammar {
    /// Number of parser states in the artifact.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Whether `id` names a terminal in this artifact's id space.
    #[must_use]
    pub fn is_terminal(&self, id: u16) -> bool {
        id < self.token_count
    }

    /// Whether `id` names a non-terminal in this artifact's id space.
    #[must_use]
    pub fn is_nonterminal(&self, id: u16) -> bool {
        id >= self.token_count && id < self.symbol_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["end", "x", "rule"];
    const META: &[SymbolMeta] = &[
        SymbolMeta {
            visible: false,
            named: false,
        },
        SymbolMeta {
            visible: true,
            named: true,
        },
        SymbolMeta {
            visible: true,
            named: true,
        },
    ];
    const STATES: &[RawState] = &[RawState {
        actions: &[(0, RawAction::Accept)],
        gotos: &[],
    }];

    const TINY: RawGrammar = RawGrammar {
        name: "tiny",
        abi_version: 15,
        symbol_count: 3,
        token_count: 2,
        external_token_count: 0,
        symbol_names: NAMES,
        symbol_meta: META,
        states: STATES,
    };

    #[test]
    fn terminal_classification_follows_token_count() {
        assert!(TINY.is_terminal(0));
        assert!(TINY.is_terminal(1));
        assert!(!TINY.is_terminal(2));

        assert!(TINY.is_nonterminal(2));
        assert!(!TINY.is_nonterminal(1));
    }

    #[test]
    fn ids_past_symbol_count_are_neither() {
        assert!(!TINY.is_terminal(3));
        assert!(!TINY.is_nonterminal(3));
    }

    #[test]
    fn state_count_reflects_table_rows() {
        assert_eq!(TINY.state_count(), 1);
    }
}
