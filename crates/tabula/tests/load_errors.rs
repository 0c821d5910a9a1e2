//! Error path integration tests for artifact loading.
//!
//! Each structural defect the loader can report is exercised by a
//! malformed fixture artifact, and the ABI window is probed at both
//! edges. Fixtures are handcrafted statics in the same shape a
//! grammar compiler would emit.

use proptest::prelude::*;
use rstest::rstest;
use tabula::{
    ABI_VERSION, CorruptionKind, LoadError, MIN_COMPATIBLE_ABI_VERSION, RawAction, RawGrammar,
    RawState, SymbolMeta, load,
};

const HIDDEN: SymbolMeta = SymbolMeta {
    visible: false,
    named: false,
};
const NAMED: SymbolMeta = SymbolMeta {
    visible: true,
    named: true,
};

const NAMES: &[&str] = &["end", "identifier", "expression", "program"];
const META: &[SymbolMeta] = &[HIDDEN, NAMED, NAMED, NAMED];

const STATES: &[RawState] = &[
    RawState {
        actions: &[(1, RawAction::Shift(1))],
        gotos: &[(2, 2)],
    },
    RawState {
        actions: &[(
            0,
            RawAction::Reduce {
                symbol: 2,
                child_count: 1,
            },
        )],
        gotos: &[],
    },
    RawState {
        actions: &[(0, RawAction::Accept)],
        gotos: &[],
    },
];

/// A minimal well-formed artifact; every corrupt fixture below is this
/// with exactly one defect introduced.
const BASE: RawGrammar = RawGrammar {
    name: "fixture",
    abi_version: ABI_VERSION,
    symbol_count: 4,
    token_count: 2,
    external_token_count: 0,
    symbol_names: NAMES,
    symbol_meta: META,
    states: STATES,
};

/// Leak a variant of the base artifact so it satisfies the loader's
/// `'static` handle contract. Test-only; artifacts are statics in
/// production.
fn leaked(grammar: RawGrammar) -> &'static RawGrammar {
    Box::leak(Box::new(grammar))
}

// === Well-formed artifact ===

#[test]
fn base_fixture_loads_cleanly() {
    let language = load(leaked(BASE)).expect("base fixture should load");

    assert_eq!(language.name(), "fixture");
    assert_eq!(language.symbol_count(), 4);
    assert_eq!(language.state_count(), 3);
    assert!(language.table_size() > 0);
}

#[test]
fn repeated_loads_of_one_artifact_are_equal() {
    static GRAMMAR: RawGrammar = BASE;

    let first = load(&GRAMMAR).expect("first load");
    let second = load(&GRAMMAR).expect("second load");

    assert_eq!(first, second);
    assert_eq!(first.info(), second.info());
}

// === ABI window ===

#[rstest]
#[case::oldest_supported(MIN_COMPATIBLE_ABI_VERSION, true)]
#[case::middle_of_window(14, true)]
#[case::current(ABI_VERSION, true)]
#[case::one_below_window(MIN_COMPATIBLE_ABI_VERSION - 1, false)]
#[case::one_above_window(ABI_VERSION + 1, false)]
#[case::ancient(0, false)]
fn abi_window_is_inclusive_on_both_edges(#[case] abi: u32, #[case] should_load: bool) {
    let result = load(leaked(RawGrammar {
        abi_version: abi,
        ..BASE
    }));

    if should_load {
        assert!(result.is_ok(), "ABI {abi} should be accepted");
    } else {
        assert!(
            matches!(
                result,
                Err(LoadError::IncompatibleVersion { found, min, max, .. })
                    if found == abi && min == MIN_COMPATIBLE_ABI_VERSION && max == ABI_VERSION
            ),
            "ABI {abi} should be rejected with the window in the error"
        );
    }
}

// === Symbol inventory defects ===

const SHORT_NAMES: &[&str] = &["end", "identifier", "expression"];
const SHORT_META: &[SymbolMeta] = &[HIDDEN, NAMED, NAMED];
const BLANK_NAME: &[&str] = &["end", "identifier", "", "program"];

// === State table defects ===

const LOOKAHEAD_NOT_TERMINAL: &[RawState] = &[RawState {
    actions: &[(2, RawAction::Shift(0)), (0, RawAction::Accept)],
    gotos: &[],
}];

const DUPLICATE_LOOKAHEAD: &[RawState] = &[RawState {
    actions: &[
        (0, RawAction::Accept),
        (1, RawAction::Shift(0)),
        (1, RawAction::Shift(0)),
    ],
    gotos: &[],
}];

const SHIFT_PAST_END: &[RawState] = &[RawState {
    actions: &[(0, RawAction::Accept), (1, RawAction::Shift(9))],
    gotos: &[],
}];

const REDUCE_TO_TERMINAL: &[RawState] = &[RawState {
    actions: &[
        (0, RawAction::Accept),
        (
            1,
            RawAction::Reduce {
                symbol: 1,
                child_count: 1,
            },
        ),
    ],
    gotos: &[],
}];

const GOTO_ON_TERMINAL: &[RawState] = &[RawState {
    actions: &[(0, RawAction::Accept)],
    gotos: &[(1, 0)],
}];

const GOTO_PAST_END: &[RawState] = &[RawState {
    actions: &[(0, RawAction::Accept)],
    gotos: &[(2, 9)],
}];

const NO_ACCEPT: &[RawState] = &[RawState {
    actions: &[(
        0,
        RawAction::Reduce {
            symbol: 2,
            child_count: 0,
        },
    )],
    gotos: &[],
}];

#[rstest]
#[case::truncated_names(
    RawGrammar { symbol_names: SHORT_NAMES, ..BASE },
    CorruptionKind::SymbolNamesMismatch { expected: 4, found: 3 }
)]
#[case::truncated_meta(
    RawGrammar { symbol_meta: SHORT_META, ..BASE },
    CorruptionKind::SymbolMetaMismatch { expected: 4, found: 3 }
)]
#[case::token_count_past_symbols(
    RawGrammar { token_count: 5, ..BASE },
    CorruptionKind::TokenCountOutOfRange { token_count: 5, symbol_count: 4 }
)]
#[case::externals_past_tokens(
    RawGrammar { external_token_count: 3, ..BASE },
    CorruptionKind::ExternalCountOutOfRange { external_count: 3, token_count: 2 }
)]
#[case::blank_symbol_name(
    RawGrammar { symbol_names: BLANK_NAME, ..BASE },
    CorruptionKind::EmptySymbolName { symbol: 2 }
)]
#[case::no_states(
    RawGrammar { states: &[], ..BASE },
    CorruptionKind::EmptyStateTable
)]
#[case::nonterminal_lookahead(
    RawGrammar { states: LOOKAHEAD_NOT_TERMINAL, ..BASE },
    CorruptionKind::LookaheadNotTerminal { state: 0, symbol: 2 }
)]
#[case::duplicate_lookahead(
    RawGrammar { states: DUPLICATE_LOOKAHEAD, ..BASE },
    CorruptionKind::DuplicateLookahead { state: 0, symbol: 1 }
)]
#[case::shift_past_end(
    RawGrammar { states: SHIFT_PAST_END, ..BASE },
    CorruptionKind::ShiftTargetOutOfRange { state: 0, target: 9 }
)]
#[case::reduce_to_terminal(
    RawGrammar { states: REDUCE_TO_TERMINAL, ..BASE },
    CorruptionKind::ReduceSymbolNotNonterminal { state: 0, symbol: 1 }
)]
#[case::goto_on_terminal(
    RawGrammar { states: GOTO_ON_TERMINAL, ..BASE },
    CorruptionKind::GotoSymbolNotNonterminal { state: 0, symbol: 1 }
)]
#[case::goto_past_end(
    RawGrammar { states: GOTO_PAST_END, ..BASE },
    CorruptionKind::GotoTargetOutOfRange { state: 0, target: 9 }
)]
#[case::no_accept_anywhere(
    RawGrammar { states: NO_ACCEPT, ..BASE },
    CorruptionKind::MissingAccept
)]
fn each_defect_is_reported_with_its_kind(
    #[case] grammar: RawGrammar,
    #[case] expected: CorruptionKind,
) {
    let error = load(leaked(grammar)).expect_err("defective artifact must be rejected");

    assert_eq!(
        error,
        LoadError::CorruptGrammar {
            name: "fixture",
            kind: expected,
        }
    );
}

#[test]
fn corruption_is_reported_against_the_offending_state() {
    // The defect sits in the second row, not the first.
    const LATE_DEFECT: &[RawState] = &[
        RawState {
            actions: &[(0, RawAction::Accept)],
            gotos: &[],
        },
        RawState {
            actions: &[(1, RawAction::Shift(40))],
            gotos: &[],
        },
    ];

    let error = load(leaked(RawGrammar {
        states: LATE_DEFECT,
        ..BASE
    }))
    .expect_err("must be rejected");

    assert_eq!(
        error,
        LoadError::CorruptGrammar {
            name: "fixture",
            kind: CorruptionKind::ShiftTargetOutOfRange {
                state: 1,
                target: 40,
            },
        }
    );
}

// === ABI window property ===

proptest! {
    #[test]
    fn any_version_outside_the_window_is_incompatible(
        abi in prop_oneof![
            0..MIN_COMPATIBLE_ABI_VERSION,
            (ABI_VERSION + 1)..=u32::MAX,
        ]
    ) {
        let result = load(leaked(RawGrammar { abi_version: abi, ..BASE }));

        let matched = matches!(
            result,
            Err(LoadError::IncompatibleVersion { found, .. }) if found == abi
        );
        prop_assert!(matched);
    }

    #[test]
    fn any_version_inside_the_window_passes_the_gate(
        abi in MIN_COMPATIBLE_ABI_VERSION..=ABI_VERSION
    ) {
        let result = load(leaked(RawGrammar { abi_version: abi, ..BASE }));

        prop_assert!(result.is_ok());
    }
}
