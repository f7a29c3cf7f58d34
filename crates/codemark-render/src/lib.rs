//! codemark renderer
//!
//! Turns source lines into markup. Each line goes through two phases:
//! partition (the lexer splits it into classified tokens) and render (each
//! token is escaped and wrapped in the tag its kind is styled with).
//!
//! ```text
//! line + ScanState → Highlighter::highlight_line() → markup + ScanState
//! ```
//!
//! # Example
//!
//! ```
//! use codemark_config::PrettyConfig;
//! use codemark_lexer::{Grammar, ScanState};
//! use codemark_render::Highlighter;
//!
//! let grammar = Grammar::javascript();
//! let pretty = PrettyConfig::default();
//! let highlighter = Highlighter::new(&grammar, &pretty);
//!
//! let line = highlighter.highlight_line("x < 1", 0, ScanState::PLAIN);
//! assert_eq!(
//!     line.markup,
//!     "<span class=\"idt\">x</span> <span class=\"opr\">&lt;</span> <span class=\"num\">1</span>"
//! );
//! ```

pub mod document;
pub mod escape;
pub mod highlighter;
pub mod render;
pub mod trace;

pub use document::{prepare_line, HighlightedDocument};
pub use highlighter::{HighlightedLine, Highlighter};
pub use trace::{Phase, TraceData, TraceHook, TracingHook};
