//! Artifact validation and wrapping.
//!
//! [`load`] is the single entry point: it gates the artifact's ABI
//! version against the runtime's supported window, runs the structural
//! sanity pass over the tables, and wraps the result in a
//! [`Language`]. One synchronous call, no I/O, no global state.
//!
//! ## Check ordering
//!
//! The ABI gate runs before anything else. An artifact compiled for a
//! different table layout cannot be inspected meaningfully, so a
//! version mismatch is reported immediately and structural findings
//! are never mixed into it. Within the structural pass, symbol
//! inventory checks run before state table checks for the same
//! reason: table entries are interpreted against the symbol counts.

use tracing::{debug, trace, warn};

use crate::error::{CorruptionKind, LoadError, Result};
use crate::language::Language;
use crate::raw::{RawAction, RawGrammar};

/// The table layout version this runtime was built for.
pub const ABI_VERSION: u32 = 15;

/// The oldest table layout version this runtime still accepts.
pub const MIN_COMPATIBLE_ABI_VERSION: u32 = 13;

/// Validate a compiled grammar artifact and wrap it as a [`Language`].
///
/// Loading is idempotent: calling this twice with the same artifact
/// returns equal `Language` values.
///
/// # Errors
///
/// Returns [`LoadError::IncompatibleVersion`] when the artifact's ABI
/// version falls outside
/// [`MIN_COMPATIBLE_ABI_VERSION`]`..=`[`ABI_VERSION`], and
/// [`LoadError::CorruptGrammar`] when the table structure fails a
/// sanity check. Both are terminal: the artifact will not change
/// between attempts without an external rebuild.
pub fn load(grammar: &'static RawGrammar) -> Result<Language> {
    debug!(
        grammar = grammar.name,
        abi = grammar.abi_version,
        "loading grammar artifact"
    );

    if !(MIN_COMPATIBLE_ABI_VERSION..=ABI_VERSION).contains(&grammar.abi_version) {
        warn!(
            grammar = grammar.name,
            abi = grammar.abi_version,
            min = MIN_COMPATIBLE_ABI_VERSION,
            max = ABI_VERSION,
            "rejecting grammar with unsupported ABI version"
        );
        return Err(LoadError::IncompatibleVersion {
            name: grammar.name,
            found: grammar.abi_version,
            min: MIN_COMPATIBLE_ABI_VERSION,
            max: ABI_VERSION,
        });
    }

    if let Some(kind) = find_defect(grammar) {
        warn!(grammar = grammar.name, %kind, "rejecting corrupt grammar");
        return Err(LoadError::CorruptGrammar {
            name: grammar.name,
            kind,
        });
    }

    debug!(
        grammar = grammar.name,
        symbols = grammar.symbol_count,
        states = grammar.state_count(),
        "grammar loaded"
    );
    Ok(Language::new(grammar))
}

/// Run the structural sanity pass, returning the first defect found.
// State ids are reported as u16: shift and goto targets are u16, so a
// table whose row index overflows u16 is unreachable from any action
// and already rejected by the range checks below.
#[allow(clippy::cast_possible_truncation)]
fn find_defect(grammar: &RawGrammar) -> Option<CorruptionKind> {
    // === Symbol inventory ===

    if grammar.symbol_names.len() != usize::from(grammar.symbol_count) {
        return Some(CorruptionKind::SymbolNamesMismatch {
            expected: grammar.symbol_count,
            found: grammar.symbol_names.len(),
        });
    }

    if grammar.symbol_meta.len() != usize::from(grammar.symbol_count) {
        return Some(CorruptionKind::SymbolMetaMismatch {
            expected: grammar.symbol_count,
            found: grammar.symbol_meta.len(),
        });
    }

    if grammar.token_count > grammar.symbol_count {
        return Some(CorruptionKind::TokenCountOutOfRange {
            token_count: grammar.token_count,
            symbol_count: grammar.symbol_count,
        });
    }

    if grammar.external_token_count > grammar.token_count {
        return Some(CorruptionKind::ExternalCountOutOfRange {
            external_count: grammar.external_token_count,
            token_count: grammar.token_count,
        });
    }

    for (id, name) in grammar.symbol_names.iter().enumerate() {
        if name.is_empty() {
            return Some(CorruptionKind::EmptySymbolName { symbol: id as u16 });
        }
    }

    // === State table ===

    if grammar.states.is_empty() {
        return Some(CorruptionKind::EmptyStateTable);
    }

    let state_count = grammar.states.len();
    let mut has_accept = false;

    for (id, row) in grammar.states.iter().enumerate() {
        let state = id as u16;

        for (i, (lookahead, action)) in row.actions.iter().enumerate() {
            if !grammar.is_terminal(*lookahead) {
                return Some(CorruptionKind::LookaheadNotTerminal {
                    state,
                    symbol: *lookahead,
                });
            }

            if row.actions[..i].iter().any(|(seen, _)| seen == lookahead) {
                return Some(CorruptionKind::DuplicateLookahead {
                    state,
                    symbol: *lookahead,
                });
            }

            match action {
                RawAction::Shift(target) => {
                    if usize::from(*target) >= state_count {
                        return Some(CorruptionKind::ShiftTargetOutOfRange {
                            state,
                            target: *target,
                        });
                    }
                }
                RawAction::Reduce { symbol, .. } => {
                    if !grammar.is_nonterminal(*symbol) {
                        return Some(CorruptionKind::ReduceSymbolNotNonterminal {
                            state,
                            symbol: *symbol,
                        });
                    }
                }
                RawAction::Accept => has_accept = true,
            }
        }

        for (symbol, target) in row.gotos {
            if !grammar.is_nonterminal(*symbol) {
                return Some(CorruptionKind::GotoSymbolNotNonterminal {
                    state,
                    symbol: *symbol,
                });
            }
            if usize::from(*target) >= state_count {
                return Some(CorruptionKind::GotoTargetOutOfRange {
                    state,
                    target: *target,
                });
            }
        }

        trace!(
            state,
            actions = row.actions.len(),
            gotos = row.gotos.len(),
            "state row validated"
        );
    }

    if !has_accept {
        return Some(CorruptionKind::MissingAccept);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawState, SymbolMeta};

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

    const WELL_FORMED: RawGrammar = RawGrammar {
        name: "fixture",
        abi_version: ABI_VERSION,
        symbol_count: 3,
        token_count: 2,
        external_token_count: 0,
        symbol_names: NAMES,
        symbol_meta: META,
        states: STATES,
    };

    static VALID: RawGrammar = WELL_FORMED;

    static TOO_OLD: RawGrammar = RawGrammar {
        abi_version: MIN_COMPATIBLE_ABI_VERSION - 1,
        ..WELL_FORMED
    };

    static TOO_NEW: RawGrammar = RawGrammar {
        abi_version: ABI_VERSION + 1,
        ..WELL_FORMED
    };

    static NO_STATES: RawGrammar = RawGrammar {
        states: &[],
        ..WELL_FORMED
    };

    #[test]
    fn well_formed_grammar_loads() {
        let language = load(&VALID).expect("fixture grammar should load");

        assert_eq!(language.name(), "fixture");
        assert_eq!(language.abi_version(), ABI_VERSION);
        assert!(language.table_size() > 0);
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let first = load(&VALID).expect("first load");
        let second = load(&VALID).expect("second load");

        assert_eq!(first, second);
    }

    #[test]
    fn abi_below_window_is_incompatible() {
        let error = load(&TOO_OLD).expect_err("stale artifact must be rejected");

        assert_eq!(
            error,
            LoadError::IncompatibleVersion {
                name: "fixture",
                found: MIN_COMPATIBLE_ABI_VERSION - 1,
                min: MIN_COMPATIBLE_ABI_VERSION,
                max: ABI_VERSION,
            }
        );
    }

    #[test]
    fn abi_above_window_is_incompatible() {
        let error = load(&TOO_NEW).expect_err("future artifact must be rejected");

        assert!(matches!(
            error,
            LoadError::IncompatibleVersion {
                found, ..
            } if found == ABI_VERSION + 1
        ));
    }

    #[test]
    fn empty_state_table_is_corrupt() {
        let error = load(&NO_STATES).expect_err("empty table must be rejected");

        assert_eq!(
            error,
            LoadError::CorruptGrammar {
                name: "fixture",
                kind: CorruptionKind::EmptyStateTable,
            }
        );
    }

    #[test]
    fn abi_gate_runs_before_structural_checks() {
        // Both defects present; the version mismatch must win.
        static OLD_AND_BROKEN: RawGrammar = RawGrammar {
            abi_version: 1,
            states: &[],
            ..WELL_FORMED
        };

        let error = load(&OLD_AND_BROKEN).expect_err("must be rejected");
        assert!(matches!(error, LoadError::IncompatibleVersion { .. }));
    }
}
