//! The loaded, runtime-usable grammar handle.
//!
//! A [`Language`] is produced only by [`crate::load`], so holding one
//! is proof the underlying artifact passed the ABI gate and the
//! structural checks. It is a shared reference to immutable static
//! tables: copying is free, and sharing across threads needs no
//! locking.

use serde::{Deserialize, Serialize};

use crate::raw::RawGrammar;

/// A strongly-typed symbol id within one grammar's id space.
///
/// Symbol ids are only meaningful against the `Language` they came
/// from; the newtype keeps them from being mixed up with state ids or
/// plain counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Extract the raw id value.
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for Symbol {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// A validated grammar, ready to hand to parser construction.
///
/// Two `Language` values are equal when they wrap the same artifact,
/// so loading the same handle twice yields equal results.
#[derive(Clone, Copy)]
pub struct Language {
    grammar: &'static RawGrammar,
}

impl Language {
    /// Wrap an artifact that already passed validation.
    pub(crate) fn new(grammar: &'static RawGrammar) -> Self {
        Self { grammar }
    }

    /// Grammar name as declared by the artifact.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.grammar.name
    }

    /// ABI version the artifact was compiled against.
    #[must_use]
    pub fn abi_version(&self) -> u32 {
        self.grammar.abi_version
    }

    /// Total number of symbols in the grammar.
    #[must_use]
    pub fn symbol_count(&self) -> u16 {
        self.grammar.symbol_count
    }

    /// Number of terminal symbols.
    #[must_use]
    pub fn token_count(&self) -> u16 {
        self.grammar.token_count
    }

    /// Number of terminals produced by an external scanner.
    #[must_use]
    pub fn external_token_count(&self) -> u16 {
        self.grammar.external_token_count
    }

    /// Number of parser states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.grammar.state_count()
    }

    /// Total number of action and goto entries across all states.
    ///
    /// A loaded grammar always reports a non-zero size: an empty table
    /// is rejected at load time.
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.grammar
            .states
            .iter()
            .map(|s| s.actions.len() + s.gotos.len())
            .sum()
    }

    /// Display name of a symbol, or `None` for ids outside the
    /// grammar's id space.
    #[must_use]
    pub fn symbol_name(&self, symbol: Symbol) -> Option<&'static str> {
        self.grammar.symbol_names.get(usize::from(symbol.0)).copied()
    }

    /// Look up a symbol by display name.
    ///
    /// Names are unique per visibility class in practice but the
    /// artifact does not guarantee it; the first match wins.
    #[must_use]
    pub fn symbol_for_name(&self, name: &str) -> Option<Symbol> {
        let id = self.grammar.symbol_names.iter().position(|n| *n == name)?;
        // Truncation is safe: the names table length was checked
        // against symbol_count (a u16) at load time.
        #[allow(clippy::cast_possible_truncation)]
        let id = id as u16;
        Some(Symbol(id))
    }

    /// Whether the symbol is a terminal.
    #[must_use]
    pub fn is_terminal(&self, symbol: Symbol) -> bool {
        self.grammar.is_terminal(symbol.0)
    }

    /// Whether the symbol appears in syntax trees.
    ///
    /// Returns `false` for ids outside the grammar's id space.
    #[must_use]
    pub fn is_visible(&self, symbol: Symbol) -> bool {
        self.grammar
            .symbol_meta
            .get(usize::from(symbol.0))
            .is_some_and(|m| m.visible)
    }

    /// Whether the symbol has a rule name.
    ///
    /// Returns `false` for ids outside the grammar's id space.
    #[must_use]
    pub fn is_named(&self, symbol: Symbol) -> bool {
        self.grammar
            .symbol_meta
            .get(usize::from(symbol.0))
            .is_some_and(|m| m.named)
    }

    /// Serializable summary of the loaded grammar.
    #[must_use]
    pub fn info(&self) -> LanguageInfo {
        LanguageInfo {
            name: self.grammar.name.to_string(),
            abi_version: self.grammar.abi_version,
            symbol_count: self.grammar.symbol_count,
            token_count: self.grammar.token_count,
            external_token_count: self.grammar.external_token_count,
            state_count: self.state_count(),
            table_size: self.table_size(),
        }
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grammar, other.grammar)
    }
}

impl Eq for Language {}

impl std::fmt::Debug for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.grammar.name)
            .field("abi_version", &self.grammar.abi_version)
            .field("symbol_count", &self.grammar.symbol_count)
            .field("state_count", &self.state_count())
            .finish_non_exhaustive()
    }
}

/// Summary of a loaded grammar, for diagnostics and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Grammar name.
    pub name: String,
    /// ABI version the artifact was compiled against.
    pub abi_version: u32,
    /// Total number of symbols.
    pub symbol_count: u16,
    /// Number of terminal symbols.
    pub token_count: u16,
    /// Number of external scanner tokens.
    pub external_token_count: u16,
    /// Number of parser states.
    pub state_count: usize,
    /// Total action and goto entries.
    pub table_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawAction, RawState, SymbolMeta};

    const NAMES: &[&str] = &["end", "word", "phrase"];
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
    const STATES: &[RawState] = &[
        RawState {
            actions: &[(1, RawAction::Shift(1))],
            gotos: &[(2, 1)],
        },
        RawState {
            actions: &[
                (
                    0,
                    RawAction::Reduce {
                        symbol: 2,
                        child_count: 1,
                    },
                ),
                (1, RawAction::Accept),
            ],
            gotos: &[],
        },
    ];

    static FIXTURE: RawGrammar = RawGrammar {
        name: "fixture",
        abi_version: 15,
        symbol_count: 3,
        token_count: 2,
        external_token_count: 0,
        symbol_names: NAMES,
        symbol_meta: META,
        states: STATES,
    };

    static OTHER: RawGrammar = RawGrammar {
        name: "fixture",
        abi_version: 15,
        symbol_count: 3,
        token_count: 2,
        external_token_count: 0,
        symbol_names: NAMES,
        symbol_meta: META,
        states: STATES,
    };

    #[test]
    fn languages_from_the_same_artifact_are_equal() {
        let a = Language::new(&FIXTURE);
        let b = Language::new(&FIXTURE);

        assert_eq!(a, b);
    }

    #[test]
    fn languages_from_distinct_artifacts_are_not_equal() {
        let a = Language::new(&FIXTURE);
        let b = Language::new(&OTHER);

        assert_ne!(a, b);
    }

    #[test]
    fn table_size_counts_actions_and_gotos() {
        let language = Language::new(&FIXTURE);

        // state 0: 1 action + 1 goto, state 1: 2 actions
        assert_eq!(language.table_size(), 4);
    }

    #[test]
    fn symbol_lookup_round_trips() {
        let language = Language::new(&FIXTURE);

        let word = language.symbol_for_name("word").expect("word exists");
        assert_eq!(language.symbol_name(word), Some("word"));
        assert!(language.is_terminal(word));
        assert!(language.is_named(word));

        let phrase = language.symbol_for_name("phrase").expect("phrase exists");
        assert!(!language.is_terminal(phrase));
    }

    #[test]
    fn out_of_range_symbols_answer_conservatively() {
        let language = Language::new(&FIXTURE);
        let bogus = Symbol(42);

        assert_eq!(language.symbol_name(bogus), None);
        assert!(!language.is_visible(bogus));
        assert!(!language.is_named(bogus));
    }

    #[test]
    fn info_serializes_with_stable_field_names() {
        let language = Language::new(&FIXTURE);
        let json = serde_json::to_value(language.info()).expect("info serializes");

        assert_eq!(json["name"], "fixture");
        assert_eq!(json["abi_version"], 15);
        assert_eq!(json["symbol_count"], 3);
        assert_eq!(json["table_size"], 4);
    }
}
