//! Parse tables for the ucode grammar.
//!
//! Symbol ids follow the layout [`tabula::RawGrammar`] documents:
//! terminals first (id 0 is the end marker, ids 7..=9 are the hidden
//! external-scanner tokens), non-terminals after. State 0 is the start
//! state. Keep the `// state N` markers aligned when editing rows;
//! everything here is checked by the runtime loader at load time.

use tabula::RawAction::{self, Accept, Shift};
use tabula::{RawGrammar, RawState, SymbolMeta};

// === Terminals ===

const END: u16 = 0;
const IDENTIFIER: u16 = 1;
const NUMBER: u16 = 2;
const STRING: u16 = 3;
const TEMPLATE_STRING: u16 = 4;
#[allow(dead_code)] // extra: consumed between any two tokens, never a lookahead
const COMMENT: u16 = 5;
#[allow(dead_code)] // extra, as above
const HTML_COMMENT: u16 = 6;
const AUTO_SEMI: u16 = 7;
#[allow(dead_code)] // surfaced only inside template strings
const TEMPLATE_CHARS: u16 = 8;
const TERNARY_QMARK: u16 = 9;
const KW_FUNCTION: u16 = 10;
const KW_IF: u16 = 11;
const KW_ELSE: u16 = 12;
const KW_WHILE: u16 = 13;
const KW_FOR: u16 = 14;
const KW_RETURN: u16 = 15;
const KW_BREAK: u16 = 16;
const KW_CONTINUE: u16 = 17;
const KW_LET: u16 = 18;
const KW_CONST: u16 = 19;
const KW_IN: u16 = 20;
const LPAREN: u16 = 21;
const RPAREN: u16 = 22;
const LBRACE: u16 = 23;
const RBRACE: u16 = 24;
const LBRACKET: u16 = 25;
const RBRACKET: u16 = 26;
const SEMI: u16 = 27;
const COMMA: u16 = 28;
const DOT: u16 = 29;
const EQ: u16 = 30;
const PLUS: u16 = 31;
const MINUS: u16 = 32;
const STAR: u16 = 33;
const SLASH: u16 = 34;
const EQEQ: u16 = 35;
const NEQ: u16 = 36;
const LT: u16 = 37;
const GT: u16 = 38;
const ARROW: u16 = 39;
const OR: u16 = 40;
const AND: u16 = 41;
const BANG: u16 = 42;
const COLON: u16 = 43;

const TOKEN_COUNT: u16 = 44;
const EXTERNAL_TOKEN_COUNT: u16 = 4;

// === Non-terminals ===

const PROGRAM: u16 = 44;
const STATEMENT: u16 = 45;
const EXPRESSION_STATEMENT: u16 = 46;
const IF_STATEMENT: u16 = 47;
const ELSE_CLAUSE: u16 = 48;
const WHILE_STATEMENT: u16 = 49;
const FOR_STATEMENT: u16 = 50;
const RETURN_STATEMENT: u16 = 51;
const BREAK_STATEMENT: u16 = 52;
const CONTINUE_STATEMENT: u16 = 53;
const STATEMENT_BLOCK: u16 = 54;
const LEXICAL_DECLARATION: u16 = 55;
const VARIABLE_DECLARATOR: u16 = 56;
const FUNCTION_DECLARATION: u16 = 57;
const FORMAL_PARAMETERS: u16 = 58;
const EXPRESSION: u16 = 59;
const PRIMARY_EXPRESSION: u16 = 60;
const BINARY_EXPRESSION: u16 = 61;
const UNARY_EXPRESSION: u16 = 62;
const ASSIGNMENT_EXPRESSION: u16 = 63;
const TERNARY_EXPRESSION: u16 = 64;
const CALL_EXPRESSION: u16 = 65;
const MEMBER_EXPRESSION: u16 = 66;
const SUBSCRIPT_EXPRESSION: u16 = 67;
const PARENTHESIZED_EXPRESSION: u16 = 68;
const ARGUMENTS: u16 = 69;
const ARROW_FUNCTION: u16 = 70;
const OBJECT: u16 = 71;
const ARRAY: u16 = 72;
const PAIR: u16 = 73;

const SYMBOL_COUNT: u16 = 74;

const NAMES: &[&str] = &[
    "end",
    "identifier",
    "number",
    "string",
    "template_string",
    "comment",
    "html_comment",
    "_automatic_semicolon",
    "_template_chars",
    "_ternary_qmark",
    "function",
    "if",
    "else",
    "while",
    "for",
    "return",
    "break",
    "continue",
    "let",
    "const",
    "in",
    "(",
    ")",
    "{",
    "}",
    "[",
    "]",
    ";",
    ",",
    ".",
    "=",
    "+",
    "-",
    "*",
    "/",
    "==",
    "!=",
    "<",
    ">",
    "=>",
    "||",
    "&&",
    "!",
    ":",
    "program",
    "statement",
    "expression_statement",
    "if_statement",
    "else_clause",
    "while_statement",
    "for_statement",
    "return_statement",
    "break_statement",
    "continue_statement",
    "statement_block",
    "lexical_declaration",
    "variable_declarator",
    "function_declaration",
    "formal_parameters",
    "expression",
    "primary_expression",
    "binary_expression",
    "unary_expression",
    "assignment_expression",
    "ternary_expression",
    "call_expression",
    "member_expression",
    "subscript_expression",
    "parenthesized_expression",
    "arguments",
    "arrow_function",
    "object",
    "array",
    "pair",
];

const HIDDEN: SymbolMeta = SymbolMeta {
    visible: false,
    named: false,
};
const NAMED: SymbolMeta = SymbolMeta {
    visible: true,
    named: true,
};
const ANON: SymbolMeta = SymbolMeta {
    visible: true,
    named: false,
};

const META: &[SymbolMeta] = &[
    HIDDEN, // end
    NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, // identifier .. html_comment
    HIDDEN, HIDDEN, HIDDEN, // external scanner tokens
    ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, // keywords
    ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, // punctuation
    ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, ANON, // operators
    NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, // program ..
    NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, // statement_block ..
    NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, NAMED, // binary_expression ..
];

/// Shorthand for reduce actions in the state rows below.
const fn r(symbol: u16, child_count: u8) -> RawAction {
    RawAction::Reduce {
        symbol,
        child_count,
    }
}

const STATES: &[RawState] = &[
    // state 0: start
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (TEMPLATE_STRING, Shift(5)),
            (KW_FUNCTION, Shift(7)),
            (KW_IF, Shift(8)),
            (KW_WHILE, Shift(9)),
            (KW_FOR, Shift(10)),
            (KW_RETURN, Shift(11)),
            (KW_BREAK, Shift(12)),
            (KW_CONTINUE, Shift(67)),
            (KW_LET, Shift(13)),
            (KW_CONST, Shift(13)),
            (LPAREN, Shift(14)),
            (LBRACE, Shift(15)),
            (LBRACKET, Shift(16)),
            (SEMI, Shift(17)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (PROGRAM, 1),
            (STATEMENT, 2),
            (EXPRESSION_STATEMENT, 3),
            (IF_STATEMENT, 3),
            (WHILE_STATEMENT, 3),
            (FOR_STATEMENT, 3),
            (RETURN_STATEMENT, 3),
            (BREAK_STATEMENT, 3),
            (CONTINUE_STATEMENT, 3),
            (STATEMENT_BLOCK, 3),
            (LEXICAL_DECLARATION, 3),
            (FUNCTION_DECLARATION, 3),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
            (BINARY_EXPRESSION, 20),
            (UNARY_EXPRESSION, 20),
            (ASSIGNMENT_EXPRESSION, 20),
            (TERNARY_EXPRESSION, 20),
            (CALL_EXPRESSION, 20),
            (MEMBER_EXPRESSION, 20),
            (SUBSCRIPT_EXPRESSION, 20),
            (PARENTHESIZED_EXPRESSION, 20),
            (ARROW_FUNCTION, 20),
            (OBJECT, 20),
            (ARRAY, 20),
        ],
    },
    // state 1: program complete
    RawState {
        actions: &[(END, Accept)],
        gotos: &[],
    },
    // state 2: statement list
    RawState {
        actions: &[
            (END, r(PROGRAM, 2)),
            (IDENTIFIER, Shift(6)),
            (KW_IF, Shift(8)),
            (KW_RETURN, Shift(11)),
            (LBRACE, Shift(15)),
            (SEMI, Shift(17)),
        ],
        gotos: &[
            (STATEMENT, 2),
            (EXPRESSION_STATEMENT, 3),
            (IF_STATEMENT, 3),
            (RETURN_STATEMENT, 3),
            (STATEMENT_BLOCK, 3),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 3: statement variant complete
    RawState {
        actions: &[
            (END, r(STATEMENT, 1)),
            (IDENTIFIER, r(STATEMENT, 1)),
            (KW_ELSE, r(STATEMENT, 1)),
            (RBRACE, r(STATEMENT, 1)),
        ],
        gotos: &[],
    },
    // state 4: property access, expecting name
    RawState {
        actions: &[(IDENTIFIER, Shift(21))],
        gotos: &[],
    },
    // state 5: literal primary
    RawState {
        actions: &[
            (END, r(PRIMARY_EXPRESSION, 1)),
            (AUTO_SEMI, r(PRIMARY_EXPRESSION, 1)),
            (TERNARY_QMARK, r(PRIMARY_EXPRESSION, 1)),
            (RPAREN, r(PRIMARY_EXPRESSION, 1)),
            (RBRACE, r(PRIMARY_EXPRESSION, 1)),
            (RBRACKET, r(PRIMARY_EXPRESSION, 1)),
            (SEMI, r(PRIMARY_EXPRESSION, 1)),
            (COMMA, r(PRIMARY_EXPRESSION, 1)),
            (PLUS, r(PRIMARY_EXPRESSION, 1)),
            (MINUS, r(PRIMARY_EXPRESSION, 1)),
            (STAR, r(PRIMARY_EXPRESSION, 1)),
            (SLASH, r(PRIMARY_EXPRESSION, 1)),
            (EQEQ, r(PRIMARY_EXPRESSION, 1)),
            (NEQ, r(PRIMARY_EXPRESSION, 1)),
            (LT, r(PRIMARY_EXPRESSION, 1)),
            (GT, r(PRIMARY_EXPRESSION, 1)),
            (OR, r(PRIMARY_EXPRESSION, 1)),
            (AND, r(PRIMARY_EXPRESSION, 1)),
        ],
        gotos: &[],
    },
    // state 6: identifier primary
    RawState {
        actions: &[
            (END, r(PRIMARY_EXPRESSION, 1)),
            (AUTO_SEMI, r(PRIMARY_EXPRESSION, 1)),
            (TERNARY_QMARK, r(PRIMARY_EXPRESSION, 1)),
            (LPAREN, Shift(22)),
            (RPAREN, r(PRIMARY_EXPRESSION, 1)),
            (RBRACE, r(PRIMARY_EXPRESSION, 1)),
            (LBRACKET, Shift(23)),
            (RBRACKET, r(PRIMARY_EXPRESSION, 1)),
            (SEMI, r(PRIMARY_EXPRESSION, 1)),
            (COMMA, r(PRIMARY_EXPRESSION, 1)),
            (DOT, Shift(4)),
            (EQ, Shift(24)),
            (PLUS, r(PRIMARY_EXPRESSION, 1)),
            (MINUS, r(PRIMARY_EXPRESSION, 1)),
            (STAR, r(PRIMARY_EXPRESSION, 1)),
            (SLASH, r(PRIMARY_EXPRESSION, 1)),
            (EQEQ, r(PRIMARY_EXPRESSION, 1)),
            (NEQ, r(PRIMARY_EXPRESSION, 1)),
            (LT, r(PRIMARY_EXPRESSION, 1)),
            (GT, r(PRIMARY_EXPRESSION, 1)),
            (ARROW, Shift(25)),
            (OR, r(PRIMARY_EXPRESSION, 1)),
            (AND, r(PRIMARY_EXPRESSION, 1)),
        ],
        gotos: &[(ARGUMENTS, 65)],
    },
    // state 7: `function`
    RawState {
        actions: &[(IDENTIFIER, Shift(26)), (LPAREN, Shift(27))],
        gotos: &[(FORMAL_PARAMETERS, 48)],
    },
    // state 8: `if`
    RawState {
        actions: &[(LPAREN, Shift(14))],
        gotos: &[(PARENTHESIZED_EXPRESSION, 71)],
    },
    // state 9: `while`
    RawState {
        actions: &[(LPAREN, Shift(14))],
        gotos: &[(PARENTHESIZED_EXPRESSION, 69)],
    },
    // state 10: `for`
    RawState {
        actions: &[(LPAREN, Shift(76))],
        gotos: &[],
    },
    // state 11: `return`
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (TEMPLATE_STRING, Shift(5)),
            (AUTO_SEMI, Shift(49)),
            (LPAREN, Shift(14)),
            (SEMI, Shift(49)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (EXPRESSION, 29),
            (PRIMARY_EXPRESSION, 20),
            (UNARY_EXPRESSION, 20),
        ],
    },
    // state 12: `break`
    RawState {
        actions: &[(AUTO_SEMI, Shift(66)), (SEMI, Shift(66))],
        gotos: &[],
    },
    // state 13: `let` / `const`
    RawState {
        actions: &[(IDENTIFIER, Shift(31))],
        gotos: &[(VARIABLE_DECLARATOR, 83)],
    },
    // state 14: `(` opening an expression
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (TEMPLATE_STRING, Shift(5)),
            (LPAREN, Shift(14)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (EXPRESSION, 32),
            (PRIMARY_EXPRESSION, 20),
            (BINARY_EXPRESSION, 20),
            (UNARY_EXPRESSION, 20),
            (ASSIGNMENT_EXPRESSION, 20),
            (TERNARY_EXPRESSION, 20),
            (CALL_EXPRESSION, 20),
            (MEMBER_EXPRESSION, 20),
            (SUBSCRIPT_EXPRESSION, 20),
            (PARENTHESIZED_EXPRESSION, 20),
        ],
    },
    // state 15: `{` opening a statement block
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (KW_IF, Shift(8)),
            (KW_RETURN, Shift(11)),
            (RBRACE, Shift(33)),
            (SEMI, Shift(17)),
        ],
        gotos: &[
            (STATEMENT, 34),
            (EXPRESSION_STATEMENT, 3),
            (IF_STATEMENT, 3),
            (RETURN_STATEMENT, 3),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 16: `[` opening an array
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (LBRACKET, Shift(16)),
            (RBRACKET, Shift(35)),
        ],
        gotos: &[(EXPRESSION, 36), (PRIMARY_EXPRESSION, 20), (ARRAY, 20)],
    },
    // state 17: `;` as empty statement
    RawState {
        actions: &[
            (END, r(STATEMENT, 1)),
            (IDENTIFIER, r(STATEMENT, 1)),
            (RBRACE, r(STATEMENT, 1)),
        ],
        gotos: &[],
    },
    // state 18: unary operator
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (LPAREN, Shift(14)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (PRIMARY_EXPRESSION, 37),
            (CALL_EXPRESSION, 37),
            (MEMBER_EXPRESSION, 37),
            (PARENTHESIZED_EXPRESSION, 37),
        ],
    },
    // state 19: expression at statement level
    RawState {
        actions: &[
            (AUTO_SEMI, Shift(28)),
            (TERNARY_QMARK, Shift(39)),
            (SEMI, Shift(28)),
            (PLUS, Shift(38)),
            (MINUS, Shift(38)),
            (STAR, Shift(38)),
            (SLASH, Shift(38)),
            (EQEQ, Shift(38)),
            (NEQ, Shift(38)),
            (LT, Shift(38)),
            (GT, Shift(38)),
            (OR, Shift(38)),
            (AND, Shift(38)),
        ],
        gotos: &[],
    },
    // state 20: expression variant complete
    RawState {
        actions: &[
            (END, r(EXPRESSION, 1)),
            (AUTO_SEMI, r(EXPRESSION, 1)),
            (TERNARY_QMARK, r(EXPRESSION, 1)),
            (RPAREN, r(EXPRESSION, 1)),
            (RBRACE, r(EXPRESSION, 1)),
            (RBRACKET, r(EXPRESSION, 1)),
            (SEMI, r(EXPRESSION, 1)),
            (COMMA, r(EXPRESSION, 1)),
            (PLUS, r(EXPRESSION, 1)),
            (MINUS, r(EXPRESSION, 1)),
            (STAR, r(EXPRESSION, 1)),
            (SLASH, r(EXPRESSION, 1)),
            (EQEQ, r(EXPRESSION, 1)),
            (NEQ, r(EXPRESSION, 1)),
            (LT, r(EXPRESSION, 1)),
            (GT, r(EXPRESSION, 1)),
            (OR, r(EXPRESSION, 1)),
            (AND, r(EXPRESSION, 1)),
            (COLON, r(EXPRESSION, 1)),
        ],
        gotos: &[],
    },
    // state 21: member access complete
    RawState {
        actions: &[
            (END, r(MEMBER_EXPRESSION, 3)),
            (AUTO_SEMI, r(MEMBER_EXPRESSION, 3)),
            (TERNARY_QMARK, r(MEMBER_EXPRESSION, 3)),
            (LPAREN, Shift(22)),
            (RPAREN, r(MEMBER_EXPRESSION, 3)),
            (RBRACE, r(MEMBER_EXPRESSION, 3)),
            (LBRACKET, Shift(23)),
            (RBRACKET, r(MEMBER_EXPRESSION, 3)),
            (SEMI, r(MEMBER_EXPRESSION, 3)),
            (COMMA, r(MEMBER_EXPRESSION, 3)),
            (DOT, Shift(4)),
            (EQ, Shift(24)),
            (PLUS, r(MEMBER_EXPRESSION, 3)),
            (MINUS, r(MEMBER_EXPRESSION, 3)),
            (STAR, r(MEMBER_EXPRESSION, 3)),
            (SLASH, r(MEMBER_EXPRESSION, 3)),
            (EQEQ, r(MEMBER_EXPRESSION, 3)),
            (NEQ, r(MEMBER_EXPRESSION, 3)),
            (LT, r(MEMBER_EXPRESSION, 3)),
            (GT, r(MEMBER_EXPRESSION, 3)),
            (OR, r(MEMBER_EXPRESSION, 3)),
            (AND, r(MEMBER_EXPRESSION, 3)),
        ],
        gotos: &[(ARGUMENTS, 65)],
    },
    // state 22: `(` opening call arguments
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (TEMPLATE_STRING, Shift(5)),
            (LPAREN, Shift(14)),
            (RPAREN, Shift(40)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (EXPRESSION, 41),
            (PRIMARY_EXPRESSION, 20),
            (UNARY_EXPRESSION, 20),
        ],
    },
    // state 23: `[` opening a subscript
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (LPAREN, Shift(14)),
        ],
        gotos: &[(EXPRESSION, 42), (PRIMARY_EXPRESSION, 20)],
    },
    // state 24: `=` assignment right-hand side
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (TEMPLATE_STRING, Shift(5)),
            (LPAREN, Shift(14)),
            (LBRACE, Shift(43)),
            (LBRACKET, Shift(16)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (EXPRESSION, 44),
            (PRIMARY_EXPRESSION, 20),
            (OBJECT, 45),
            (ARRAY, 45),
        ],
    },
    // state 25: `=>` arrow body
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (LPAREN, Shift(14)),
            (LBRACE, Shift(15)),
        ],
        gotos: &[
            (STATEMENT_BLOCK, 46),
            (EXPRESSION, 46),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 26: function name
    RawState {
        actions: &[(LPAREN, Shift(27))],
        gotos: &[(FORMAL_PARAMETERS, 48)],
    },
    // state 27: parameter list
    RawState {
        actions: &[(IDENTIFIER, Shift(47)), (RPAREN, Shift(30))],
        gotos: &[],
    },
    // state 28: `;` terminating an expression statement
    RawState {
        actions: &[
            (END, r(EXPRESSION_STATEMENT, 2)),
            (IDENTIFIER, r(EXPRESSION_STATEMENT, 2)),
            (KW_ELSE, r(EXPRESSION_STATEMENT, 2)),
            (RBRACE, r(EXPRESSION_STATEMENT, 2)),
        ],
        gotos: &[],
    },
    // state 29: return value
    RawState {
        actions: &[
            (AUTO_SEMI, Shift(49)),
            (SEMI, Shift(49)),
            (PLUS, Shift(38)),
            (MINUS, Shift(38)),
        ],
        gotos: &[],
    },
    // state 30: `)` closing empty parameters
    RawState {
        actions: &[
            (LBRACE, r(FORMAL_PARAMETERS, 2)),
            (ARROW, r(FORMAL_PARAMETERS, 2)),
        ],
        gotos: &[],
    },
    // state 31: declarator name
    RawState {
        actions: &[
            (AUTO_SEMI, r(VARIABLE_DECLARATOR, 1)),
            (SEMI, r(VARIABLE_DECLARATOR, 1)),
            (COMMA, r(VARIABLE_DECLARATOR, 1)),
            (EQ, Shift(24)),
        ],
        gotos: &[],
    },
    // state 32: parenthesized expression body
    RawState {
        actions: &[
            (RPAREN, Shift(51)),
            (PLUS, Shift(38)),
            (MINUS, Shift(38)),
            (STAR, Shift(38)),
            (SLASH, Shift(38)),
        ],
        gotos: &[],
    },
    // state 33: `}` closing a block
    RawState {
        actions: &[
            (END, r(STATEMENT_BLOCK, 3)),
            (IDENTIFIER, r(STATEMENT_BLOCK, 3)),
            (KW_ELSE, r(STATEMENT_BLOCK, 3)),
            (RBRACE, r(STATEMENT_BLOCK, 3)),
        ],
        gotos: &[],
    },
    // state 34: statement inside a block
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (KW_IF, Shift(8)),
            (RBRACE, Shift(33)),
            (SEMI, Shift(17)),
        ],
        gotos: &[
            (STATEMENT, 34),
            (EXPRESSION_STATEMENT, 3),
            (IF_STATEMENT, 3),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 35: `]` closing an array
    RawState {
        actions: &[
            (END, r(ARRAY, 3)),
            (AUTO_SEMI, r(ARRAY, 3)),
            (RPAREN, r(ARRAY, 3)),
            (RBRACE, r(ARRAY, 3)),
            (RBRACKET, r(ARRAY, 3)),
            (SEMI, r(ARRAY, 3)),
            (COMMA, r(ARRAY, 3)),
            (PLUS, r(ARRAY, 3)),
            (MINUS, r(ARRAY, 3)),
        ],
        gotos: &[],
    },
    // state 36: array element
    RawState {
        actions: &[
            (RBRACKET, Shift(35)),
            (COMMA, Shift(16)),
            (PLUS, Shift(38)),
        ],
        gotos: &[],
    },
    // state 37: unary operand complete
    RawState {
        actions: &[
            (END, r(UNARY_EXPRESSION, 2)),
            (AUTO_SEMI, r(UNARY_EXPRESSION, 2)),
            (TERNARY_QMARK, r(UNARY_EXPRESSION, 2)),
            (RPAREN, r(UNARY_EXPRESSION, 2)),
            (RBRACE, r(UNARY_EXPRESSION, 2)),
            (RBRACKET, r(UNARY_EXPRESSION, 2)),
            (SEMI, r(UNARY_EXPRESSION, 2)),
            (COMMA, r(UNARY_EXPRESSION, 2)),
            (PLUS, r(UNARY_EXPRESSION, 2)),
            (MINUS, r(UNARY_EXPRESSION, 2)),
            (STAR, r(UNARY_EXPRESSION, 2)),
            (SLASH, r(UNARY_EXPRESSION, 2)),
            (OR, r(UNARY_EXPRESSION, 2)),
            (AND, r(UNARY_EXPRESSION, 2)),
        ],
        gotos: &[],
    },
    // state 38: binary operator
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
            (TEMPLATE_STRING, Shift(5)),
            (LPAREN, Shift(14)),
            (MINUS, Shift(18)),
            (BANG, Shift(18)),
        ],
        gotos: &[
            (PRIMARY_EXPRESSION, 52),
            (CALL_EXPRESSION, 52),
            (MEMBER_EXPRESSION, 52),
            (SUBSCRIPT_EXPRESSION, 52),
            (PARENTHESIZED_EXPRESSION, 52),
        ],
    },
    // state 39: `?` ternary consequence
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (LPAREN, Shift(14)),
        ],
        gotos: &[(EXPRESSION, 53), (PRIMARY_EXPRESSION, 20)],
    },
    // state 40: `)` closing empty arguments
    RawState {
        actions: &[
            (END, r(ARGUMENTS, 2)),
            (AUTO_SEMI, r(ARGUMENTS, 2)),
            (RPAREN, r(ARGUMENTS, 2)),
            (RBRACE, r(ARGUMENTS, 2)),
            (RBRACKET, r(ARGUMENTS, 2)),
            (SEMI, r(ARGUMENTS, 2)),
            (COMMA, r(ARGUMENTS, 2)),
            (DOT, r(ARGUMENTS, 2)),
            (PLUS, r(ARGUMENTS, 2)),
            (MINUS, r(ARGUMENTS, 2)),
            (OR, r(ARGUMENTS, 2)),
            (AND, r(ARGUMENTS, 2)),
        ],
        gotos: &[],
    },
    // state 41: argument expression
    RawState {
        actions: &[
            (RPAREN, Shift(54)),
            (COMMA, Shift(22)),
            (PLUS, Shift(38)),
        ],
        gotos: &[],
    },
    // state 42: subscript index
    RawState {
        actions: &[(RBRACKET, Shift(55)), (PLUS, Shift(38))],
        gotos: &[],
    },
    // state 43: `{` opening an object
    RawState {
        actions: &[
            (IDENTIFIER, Shift(56)),
            (STRING, Shift(56)),
            (RBRACE, Shift(57)),
        ],
        gotos: &[(PAIR, 58)],
    },
    // state 44: assignment right-hand side complete
    RawState {
        actions: &[
            (END, r(ASSIGNMENT_EXPRESSION, 3)),
            (AUTO_SEMI, r(ASSIGNMENT_EXPRESSION, 3)),
            (RPAREN, r(ASSIGNMENT_EXPRESSION, 3)),
            (RBRACE, r(ASSIGNMENT_EXPRESSION, 3)),
            (RBRACKET, r(ASSIGNMENT_EXPRESSION, 3)),
            (SEMI, r(ASSIGNMENT_EXPRESSION, 3)),
            (COMMA, r(ASSIGNMENT_EXPRESSION, 3)),
        ],
        gotos: &[],
    },
    // state 45: object or array literal as initializer
    RawState {
        actions: &[
            (END, r(EXPRESSION, 1)),
            (AUTO_SEMI, r(EXPRESSION, 1)),
            (RBRACE, r(EXPRESSION, 1)),
            (SEMI, r(EXPRESSION, 1)),
            (COMMA, r(EXPRESSION, 1)),
        ],
        gotos: &[],
    },
    // state 46: arrow body complete
    RawState {
        actions: &[
            (END, r(ARROW_FUNCTION, 3)),
            (AUTO_SEMI, r(ARROW_FUNCTION, 3)),
            (RPAREN, r(ARROW_FUNCTION, 3)),
            (RBRACE, r(ARROW_FUNCTION, 3)),
            (SEMI, r(ARROW_FUNCTION, 3)),
            (COMMA, r(ARROW_FUNCTION, 3)),
        ],
        gotos: &[],
    },
    // state 47: parameter name
    RawState {
        actions: &[(RPAREN, Shift(84)), (COMMA, Shift(27))],
        gotos: &[],
    },
    // state 48: parameters complete, expecting body
    RawState {
        actions: &[(LBRACE, Shift(15)), (ARROW, Shift(25))],
        gotos: &[(STATEMENT_BLOCK, 59)],
    },
    // state 49: `;` terminating a return
    RawState {
        actions: &[
            (END, r(RETURN_STATEMENT, 3)),
            (IDENTIFIER, r(RETURN_STATEMENT, 3)),
            (KW_ELSE, r(RETURN_STATEMENT, 3)),
            (RBRACE, r(RETURN_STATEMENT, 3)),
        ],
        gotos: &[],
    },
    // state 50: `;` terminating a declaration
    RawState {
        actions: &[
            (END, r(LEXICAL_DECLARATION, 3)),
            (IDENTIFIER, r(LEXICAL_DECLARATION, 3)),
            (RBRACE, r(LEXICAL_DECLARATION, 3)),
        ],
        gotos: &[],
    },
    // state 51: `)` closing a parenthesized expression
    RawState {
        actions: &[
            (END, r(PARENTHESIZED_EXPRESSION, 3)),
            (IDENTIFIER, r(PARENTHESIZED_EXPRESSION, 3)),
            (AUTO_SEMI, r(PARENTHESIZED_EXPRESSION, 3)),
            (TERNARY_QMARK, r(PARENTHESIZED_EXPRESSION, 3)),
            (LPAREN, r(PARENTHESIZED_EXPRESSION, 3)),
            (RPAREN, r(PARENTHESIZED_EXPRESSION, 3)),
            (LBRACE, r(PARENTHESIZED_EXPRESSION, 3)),
            (RBRACE, r(PARENTHESIZED_EXPRESSION, 3)),
            (RBRACKET, r(PARENTHESIZED_EXPRESSION, 3)),
            (SEMI, r(PARENTHESIZED_EXPRESSION, 3)),
            (COMMA, r(PARENTHESIZED_EXPRESSION, 3)),
            (PLUS, r(PARENTHESIZED_EXPRESSION, 3)),
            (MINUS, r(PARENTHESIZED_EXPRESSION, 3)),
            (STAR, r(PARENTHESIZED_EXPRESSION, 3)),
            (SLASH, r(PARENTHESIZED_EXPRESSION, 3)),
            (EQEQ, r(PARENTHESIZED_EXPRESSION, 3)),
            (NEQ, r(PARENTHESIZED_EXPRESSION, 3)),
            (LT, r(PARENTHESIZED_EXPRESSION, 3)),
            (GT, r(PARENTHESIZED_EXPRESSION, 3)),
            (OR, r(PARENTHESIZED_EXPRESSION, 3)),
            (AND, r(PARENTHESIZED_EXPRESSION, 3)),
        ],
        gotos: &[],
    },
    // state 52: binary right operand complete
    RawState {
        actions: &[
            (END, r(BINARY_EXPRESSION, 3)),
            (AUTO_SEMI, r(BINARY_EXPRESSION, 3)),
            (TERNARY_QMARK, r(BINARY_EXPRESSION, 3)),
            (RPAREN, r(BINARY_EXPRESSION, 3)),
            (RBRACE, r(BINARY_EXPRESSION, 3)),
            (RBRACKET, r(BINARY_EXPRESSION, 3)),
            (SEMI, r(BINARY_EXPRESSION, 3)),
            (COMMA, r(BINARY_EXPRESSION, 3)),
            (OR, r(BINARY_EXPRESSION, 3)),
            (AND, r(BINARY_EXPRESSION, 3)),
        ],
        gotos: &[],
    },
    // state 53: ternary consequence complete
    RawState {
        actions: &[(COLON, Shift(60))],
        gotos: &[],
    },
    // state 54: `)` closing arguments
    RawState {
        actions: &[
            (END, r(ARGUMENTS, 3)),
            (AUTO_SEMI, r(ARGUMENTS, 3)),
            (RPAREN, r(ARGUMENTS, 3)),
            (RBRACE, r(ARGUMENTS, 3)),
            (RBRACKET, r(ARGUMENTS, 3)),
            (SEMI, r(ARGUMENTS, 3)),
            (COMMA, r(ARGUMENTS, 3)),
            (DOT, r(ARGUMENTS, 3)),
            (PLUS, r(ARGUMENTS, 3)),
            (MINUS, r(ARGUMENTS, 3)),
            (OR, r(ARGUMENTS, 3)),
            (AND, r(ARGUMENTS, 3)),
        ],
        gotos: &[],
    },
    // state 55: `]` closing a subscript
    RawState {
        actions: &[
            (END, r(SUBSCRIPT_EXPRESSION, 4)),
            (AUTO_SEMI, r(SUBSCRIPT_EXPRESSION, 4)),
            (RPAREN, r(SUBSCRIPT_EXPRESSION, 4)),
            (RBRACE, r(SUBSCRIPT_EXPRESSION, 4)),
            (RBRACKET, r(SUBSCRIPT_EXPRESSION, 4)),
            (SEMI, r(SUBSCRIPT_EXPRESSION, 4)),
            (COMMA, r(SUBSCRIPT_EXPRESSION, 4)),
            (DOT, r(SUBSCRIPT_EXPRESSION, 4)),
            (PLUS, r(SUBSCRIPT_EXPRESSION, 4)),
            (MINUS, r(SUBSCRIPT_EXPRESSION, 4)),
        ],
        gotos: &[],
    },
    // state 56: object key
    RawState {
        actions: &[(COLON, Shift(61))],
        gotos: &[],
    },
    // state 57: `}` closing an empty object
    RawState {
        actions: &[
            (END, r(OBJECT, 2)),
            (AUTO_SEMI, r(OBJECT, 2)),
            (RPAREN, r(OBJECT, 2)),
            (RBRACE, r(OBJECT, 2)),
            (SEMI, r(OBJECT, 2)),
            (COMMA, r(OBJECT, 2)),
        ],
        gotos: &[],
    },
    // state 58: pair complete
    RawState {
        actions: &[(RBRACE, Shift(62)), (COMMA, Shift(43))],
        gotos: &[],
    },
    // state 59: function body complete
    RawState {
        actions: &[
            (END, r(FUNCTION_DECLARATION, 4)),
            (IDENTIFIER, r(FUNCTION_DECLARATION, 4)),
            (RBRACE, r(FUNCTION_DECLARATION, 4)),
        ],
        gotos: &[],
    },
    // state 60: `:` ternary alternative
    RawState {
        actions: &[(IDENTIFIER, Shift(6)), (NUMBER, Shift(5))],
        gotos: &[(EXPRESSION, 63), (PRIMARY_EXPRESSION, 20)],
    },
    // state 61: pair value
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (NUMBER, Shift(5)),
            (STRING, Shift(5)),
        ],
        gotos: &[(EXPRESSION, 64), (PRIMARY_EXPRESSION, 20)],
    },
    // state 62: `}` closing an object
    RawState {
        actions: &[
            (END, r(OBJECT, 4)),
            (AUTO_SEMI, r(OBJECT, 4)),
            (RPAREN, r(OBJECT, 4)),
            (RBRACE, r(OBJECT, 4)),
            (SEMI, r(OBJECT, 4)),
            (COMMA, r(OBJECT, 4)),
        ],
        gotos: &[],
    },
    // state 63: ternary alternative complete
    RawState {
        actions: &[
            (END, r(TERNARY_EXPRESSION, 5)),
            (AUTO_SEMI, r(TERNARY_EXPRESSION, 5)),
            (RPAREN, r(TERNARY_EXPRESSION, 5)),
            (RBRACE, r(TERNARY_EXPRESSION, 5)),
            (SEMI, r(TERNARY_EXPRESSION, 5)),
            (COMMA, r(TERNARY_EXPRESSION, 5)),
        ],
        gotos: &[],
    },
    // state 64: pair value complete
    RawState {
        actions: &[(RBRACE, r(PAIR, 3)), (COMMA, r(PAIR, 3))],
        gotos: &[],
    },
    // state 65: arguments attached to callee
    RawState {
        actions: &[
            (END, r(CALL_EXPRESSION, 2)),
            (AUTO_SEMI, r(CALL_EXPRESSION, 2)),
            (TERNARY_QMARK, r(CALL_EXPRESSION, 2)),
            (RPAREN, r(CALL_EXPRESSION, 2)),
            (RBRACE, r(CALL_EXPRESSION, 2)),
            (RBRACKET, r(CALL_EXPRESSION, 2)),
            (SEMI, r(CALL_EXPRESSION, 2)),
            (COMMA, r(CALL_EXPRESSION, 2)),
            (DOT, r(CALL_EXPRESSION, 2)),
            (PLUS, r(CALL_EXPRESSION, 2)),
            (MINUS, r(CALL_EXPRESSION, 2)),
            (STAR, r(CALL_EXPRESSION, 2)),
            (SLASH, r(CALL_EXPRESSION, 2)),
            (OR, r(CALL_EXPRESSION, 2)),
            (AND, r(CALL_EXPRESSION, 2)),
        ],
        gotos: &[],
    },
    // state 66: `;` terminating a break
    RawState {
        actions: &[
            (END, r(BREAK_STATEMENT, 2)),
            (IDENTIFIER, r(BREAK_STATEMENT, 2)),
            (RBRACE, r(BREAK_STATEMENT, 2)),
        ],
        gotos: &[],
    },
    // state 67: `continue`
    RawState {
        actions: &[(AUTO_SEMI, Shift(68)), (SEMI, Shift(68))],
        gotos: &[],
    },
    // state 68: `;` terminating a continue
    RawState {
        actions: &[
            (END, r(CONTINUE_STATEMENT, 2)),
            (IDENTIFIER, r(CONTINUE_STATEMENT, 2)),
            (RBRACE, r(CONTINUE_STATEMENT, 2)),
        ],
        gotos: &[],
    },
    // state 69: while condition complete
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (LBRACE, Shift(15)),
            (SEMI, Shift(17)),
        ],
        gotos: &[
            (STATEMENT, 70),
            (STATEMENT_BLOCK, 70),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 70: while body complete
    RawState {
        actions: &[
            (END, r(WHILE_STATEMENT, 3)),
            (IDENTIFIER, r(WHILE_STATEMENT, 3)),
            (KW_ELSE, r(WHILE_STATEMENT, 3)),
            (RBRACE, r(WHILE_STATEMENT, 3)),
        ],
        gotos: &[],
    },
    // state 71: if condition complete
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (LBRACE, Shift(15)),
            (SEMI, Shift(17)),
        ],
        gotos: &[
            (STATEMENT, 72),
            (STATEMENT_BLOCK, 72),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 72: if consequence complete
    RawState {
        actions: &[
            (END, r(IF_STATEMENT, 3)),
            (IDENTIFIER, r(IF_STATEMENT, 3)),
            (KW_ELSE, Shift(73)),
            (RBRACE, r(IF_STATEMENT, 3)),
        ],
        gotos: &[(ELSE_CLAUSE, 75)],
    },
    // state 73: `else`
    RawState {
        actions: &[
            (IDENTIFIER, Shift(6)),
            (KW_IF, Shift(8)),
            (LBRACE, Shift(15)),
        ],
        gotos: &[
            (STATEMENT, 74),
            (IF_STATEMENT, 74),
            (STATEMENT_BLOCK, 74),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 74: else body complete
    RawState {
        actions: &[
            (END, r(ELSE_CLAUSE, 2)),
            (IDENTIFIER, r(ELSE_CLAUSE, 2)),
            (RBRACE, r(ELSE_CLAUSE, 2)),
        ],
        gotos: &[],
    },
    // state 75: if with else complete
    RawState {
        actions: &[
            (END, r(IF_STATEMENT, 4)),
            (IDENTIFIER, r(IF_STATEMENT, 4)),
            (KW_ELSE, r(IF_STATEMENT, 4)),
            (RBRACE, r(IF_STATEMENT, 4)),
        ],
        gotos: &[],
    },
    // state 76: `(` opening a for header
    RawState {
        actions: &[
            (IDENTIFIER, Shift(77)),
            (KW_LET, Shift(13)),
            (SEMI, Shift(17)),
        ],
        gotos: &[
            (LEXICAL_DECLARATION, 78),
            (EXPRESSION, 32),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 77: for binding
    RawState {
        actions: &[(KW_IN, Shift(79)), (EQ, Shift(24))],
        gotos: &[],
    },
    // state 78: for declaration complete
    RawState {
        actions: &[(RPAREN, Shift(81))],
        gotos: &[],
    },
    // state 79: `in` iterated value
    RawState {
        actions: &[(IDENTIFIER, Shift(6)), (NUMBER, Shift(5))],
        gotos: &[(EXPRESSION, 80), (PRIMARY_EXPRESSION, 20)],
    },
    // state 80: iterated value complete
    RawState {
        actions: &[(RPAREN, Shift(81))],
        gotos: &[],
    },
    // state 81: `)` closing a for header
    RawState {
        actions: &[(IDENTIFIER, Shift(6)), (LBRACE, Shift(15))],
        gotos: &[
            (STATEMENT, 82),
            (STATEMENT_BLOCK, 82),
            (EXPRESSION, 19),
            (PRIMARY_EXPRESSION, 20),
        ],
    },
    // state 82: for body complete
    RawState {
        actions: &[
            (END, r(FOR_STATEMENT, 5)),
            (IDENTIFIER, r(FOR_STATEMENT, 5)),
            (RBRACE, r(FOR_STATEMENT, 5)),
        ],
        gotos: &[],
    },
    // state 83: declarator list
    RawState {
        actions: &[
            (AUTO_SEMI, Shift(50)),
            (SEMI, Shift(50)),
            (COMMA, Shift(13)),
        ],
        gotos: &[],
    },
    // state 84: `)` closing parameters
    RawState {
        actions: &[
            (LBRACE, r(FORMAL_PARAMETERS, 3)),
            (ARROW, r(FORMAL_PARAMETERS, 3)),
        ],
        gotos: &[],
    },
];

/// The compiled ucode grammar artifact.
pub static GRAMMAR: RawGrammar = RawGrammar {
    name: "ucode",
    abi_version: 15,
    symbol_count: SYMBOL_COUNT,
    token_count: TOKEN_COUNT,
    external_token_count: EXTERNAL_TOKEN_COUNT,
    symbol_names: NAMES,
    symbol_meta: META,
    states: STATES,
};
