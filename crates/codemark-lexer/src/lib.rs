//! codemark lexer
//!
//! Splits one line of source code into classified tokens for highlighting.
//! Lines are scanned independently; the only thing carried from one line to
//! the next is a small [`ScanState`] describing an open block comment or
//! string. Scanning never fails: anything unrecognized becomes `Plain`, and
//! the tokens of a line always concatenate back to the line.
//!
//! # Example
//!
//! ```
//! use codemark_lexer::{Grammar, LineScanner, ScanState, TokenKind};
//!
//! let grammar = Grammar::javascript();
//! let line = LineScanner::scan_line(&grammar, "return x;", ScanState::PLAIN);
//! assert_eq!(line.tokens[0].kind, TokenKind::Keyword);
//! assert!(line.state.is_plain());
//! ```

pub mod grammar;
pub mod scanner;
pub mod state;
pub mod token;

use std::fmt;

pub use grammar::{Grammar, GrammarBuilder, GrammarError, StringDelimiter};
pub use scanner::{LineScanner, ScannedLine};
pub use state::{ScanMode, ScanState, StringKind};
pub use token::{Span, Token, TokenKind};

/// A multi-line construct that can be left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    BlockComment,
    String(StringKind),
}

impl Construct {
    /// The construct still open in `state`, if any.
    pub fn open_in(state: ScanState) -> Option<Construct> {
        match state.mode {
            ScanMode::InBlockComment => Some(Construct::BlockComment),
            ScanMode::InString { kind, .. } => Some(Construct::String(kind)),
            ScanMode::Plain | ScanMode::InLineComment | ScanMode::InRegex => None,
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::BlockComment => f.write_str("block comment"),
            Construct::String(StringKind::Single) => f.write_str("single-quoted string"),
            Construct::String(StringKind::Double) => f.write_str("double-quoted string"),
            Construct::String(StringKind::Template) => f.write_str("template string"),
        }
    }
}

/// Advisory: a string or block comment was not closed.
///
/// Never returned as an `Err` by the scanner or highlighter; callers decide
/// whether to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unterminated {construct} at line {}", .line_index + 1)]
pub struct UnterminatedConstruct {
    pub construct: Construct,
    /// Zero-based index of the line where the construct was left open.
    pub line_index: usize,
}
