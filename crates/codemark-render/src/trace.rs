//! Optional observation of the highlighting phases.

use codemark_lexer::{ScanState, UnterminatedConstruct};

/// The step of per-line processing a trace event comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The line was split into tokens.
    Partition,
    /// The tokens were turned into markup.
    Render,
}

/// What happened during one phase of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceData {
    pub line_index: usize,
    pub state_in: ScanState,
    pub state_out: ScanState,
    pub tokens: usize,
    /// Bytes consumed (partition) or produced (render).
    pub bytes: usize,
}

/// Receives trace events from a [`Highlighter`](crate::Highlighter).
pub trait TraceHook: Send + Sync {
    fn on_phase(&self, phase: Phase, data: &TraceData);

    fn on_unterminated(&self, _advisory: &UnterminatedConstruct) {}
}

/// Forwards trace events to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl TraceHook for TracingHook {
    fn on_phase(&self, phase: Phase, data: &TraceData) {
        tracing::trace!(
            ?phase,
            line = data.line_index,
            state_in = ?data.state_in.mode,
            state_out = ?data.state_out.mode,
            tokens = data.tokens,
            bytes = data.bytes,
            "highlight phase"
        );
    }

    fn on_unterminated(&self, advisory: &UnterminatedConstruct) {
        tracing::debug!(
            construct = %advisory.construct,
            line = advisory.line_index + 1,
            "unterminated construct"
        );
    }
}
