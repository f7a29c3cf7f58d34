//! Whole-document helpers: line preparation and final assembly.

use std::borrow::Cow;

use codemark_config::PrettyConfig;
use codemark_lexer::{ScanState, UnterminatedConstruct};

/// Apply tab expansion and indentation trimming to one source line.
///
/// Tabs become `tab_length` spaces, then up to `trim_space` leading spaces
/// are removed. Text other than leading spaces is never removed.
pub fn prepare_line<'a>(line: &'a str, pretty: &PrettyConfig) -> Cow<'a, str> {
    let mut line = Cow::Borrowed(line);

    if line.contains('\t') {
        let spaces = " ".repeat(pretty.tab_length);
        line = Cow::Owned(line.replace('\t', &spaces));
    }

    if pretty.trim_space > 0 {
        let leading = line.len() - line.trim_start_matches(' ').len();
        let cut = leading.min(pretty.trim_space);
        if cut > 0 {
            line = match line {
                Cow::Borrowed(s) => Cow::Borrowed(&s[cut..]),
                Cow::Owned(s) => Cow::Owned(s[cut..].to_string()),
            };
        }
    }

    line
}

/// A highlighted document.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedDocument {
    /// Markup for each source line, in order.
    pub lines: Vec<String>,
    /// State after the last line. Non-plain means something was left open.
    pub state_out: ScanState,
    /// Strings closed defensively at line end, then any construct still open
    /// at the end of the document.
    pub warnings: Vec<UnterminatedConstruct>,
}

impl HighlightedDocument {
    /// Assemble the lines into one code block.
    ///
    /// With line numbers each line becomes an item of an ordered list;
    /// otherwise lines are joined with newlines inside a `pre`.
    pub fn to_html(&self, line_numbers: bool) -> String {
        let mut html = String::from("<pre class=\"code\">");

        if line_numbers {
            html.push_str("<ol class=\"linenums\">");
            for line in &self.lines {
                html.push_str("<li>");
                html.push_str(line);
                html.push_str("</li>");
            }
            html.push_str("</ol>");
        } else {
            html.push_str(&self.lines.join("\n"));
        }

        html.push_str("</pre>");
        html
    }
}
