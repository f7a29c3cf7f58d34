use codemark_config::PrettyConfig;
use codemark_lexer::{Construct, Grammar, LineScanner, ScanState, UnterminatedConstruct};

use crate::document::{prepare_line, HighlightedDocument};
use crate::render::render_tokens;
use crate::trace::{Phase, TraceData, TraceHook};

/// Markup for one line plus the state to carry into the next.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedLine {
    pub markup: String,
    pub state_out: ScanState,
    /// The line ends inside a comment or string that it opened itself.
    pub opens_construct: bool,
    /// A single-line string was closed at line end without its terminator.
    pub unterminated: Option<UnterminatedConstruct>,
}

/// Syntax highlighting engine.
///
/// Borrows its grammar and prettifier settings; holds no mutable state, so
/// one highlighter can serve many documents and threads at once.
#[derive(Clone, Copy)]
pub struct Highlighter<'a> {
    grammar: &'a Grammar,
    pretty: &'a PrettyConfig,
    hook: Option<&'a dyn TraceHook>,
}

impl<'a> Highlighter<'a> {
    pub fn new(grammar: &'a Grammar, pretty: &'a PrettyConfig) -> Self {
        Self {
            grammar,
            pretty,
            hook: None,
        }
    }

    /// Report each phase of each line to `hook`.
    pub fn with_trace_hook(self, hook: &'a dyn TraceHook) -> Self {
        Self {
            hook: Some(hook),
            ..self
        }
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Highlight one line.
    ///
    /// `line` must not contain a line break. `line_index` is only used for
    /// tracing and advisories; the markup depends on `line` and `state_in`
    /// alone.
    pub fn highlight_line(
        &self,
        line: &str,
        line_index: usize,
        state_in: ScanState,
    ) -> HighlightedLine {
        let scanned = LineScanner::scan_line(self.grammar, line, state_in);
        let opens_construct = scanned.opens_construct(state_in);
        let mut data = TraceData {
            line_index,
            state_in,
            state_out: scanned.state,
            tokens: scanned.tokens.len(),
            bytes: line.len(),
        };
        self.trace(Phase::Partition, &data);

        let mut markup = String::with_capacity(line.len() * 2);
        render_tokens(&scanned.tokens, self.pretty, &mut markup);
        data.bytes = markup.len();
        self.trace(Phase::Render, &data);

        let unterminated = scanned
            .unterminated
            .map(|construct| UnterminatedConstruct {
                construct,
                line_index,
            });
        if let Some(advisory) = &unterminated {
            self.report(advisory);
        }

        HighlightedLine {
            markup,
            state_out: scanned.state,
            opens_construct,
            unterminated,
        }
    }

    /// Highlight a whole document, threading scan state from line to line.
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped) and prepared with
    /// the prettifier's tab and indentation settings first.
    pub fn highlight_document(&self, source: &str) -> HighlightedDocument {
        let mut lines = Vec::new();
        let mut warnings = Vec::new();
        let mut state = ScanState::PLAIN;
        let mut opened_at = None;

        for (index, raw) in source.lines().enumerate() {
            let line = prepare_line(raw, self.pretty);
            let out = self.highlight_line(&line, index, state);

            if out.state_out.is_plain() {
                opened_at = None;
            } else if out.opens_construct {
                opened_at = Some(index);
            }

            warnings.extend(out.unterminated);
            lines.push(out.markup);
            state = out.state_out;
        }

        if let (Some(construct), Some(line_index)) = (Construct::open_in(state), opened_at) {
            let advisory = UnterminatedConstruct {
                construct,
                line_index,
            };
            self.report(&advisory);
            warnings.push(advisory);
        }

        HighlightedDocument {
            lines,
            state_out: state,
            warnings,
        }
    }

    fn trace(&self, phase: Phase, data: &TraceData) {
        if let Some(hook) = self.hook {
            hook.on_phase(phase, data);
        }
    }

    fn report(&self, advisory: &UnterminatedConstruct) {
        if let Some(hook) = self.hook {
            hook.on_unterminated(advisory);
        }
    }
}
