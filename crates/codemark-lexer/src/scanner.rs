use crate::grammar::Grammar;
use crate::state::{ScanMode, ScanState, StringKind};
use crate::token::{Span, Token, TokenKind};
use crate::Construct;

/// The result of scanning one line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedLine<'a> {
    pub tokens: Vec<Token<'a>>,
    /// State to feed into the next line.
    pub state: ScanState,
    /// Set when a single-line string was closed at line end without its
    /// terminator.
    pub unterminated: Option<Construct>,
}

impl ScannedLine<'_> {
    /// Concatenated token text. Always equal to the scanned line.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text).collect()
    }

    /// Whether the line ends inside a construct it opened itself, rather
    /// than one carried in through `state_in` and never closed.
    pub fn opens_construct(&self, state_in: ScanState) -> bool {
        if Construct::open_in(self.state).is_none() {
            return false;
        }
        // A carried construct that stays open spans the whole line as one
        // token; closing and reopening always needs a second token.
        !(self.state == state_in && self.tokens.len() <= 1)
    }
}

/// Single-line scanner.
///
/// Walks one line left to right. The current [`ScanMode`] decides what the
/// next character can mean; in `Plain` mode every position is tested against
/// a fixed priority order so exactly one branch consumes at least one
/// character. Modes entered mid-line keep the token start, so an opener and
/// its body come out as one token.
pub struct LineScanner<'g, 'a> {
    grammar: &'g Grammar,
    line: &'a str,
    pos: usize,
    column: usize,
    start: usize,
    start_column: usize,
    mode: ScanMode,
    /// The last thing consumed inside a string was a backslash at line end.
    continued: bool,
    tokens: Vec<Token<'a>>,
    unterminated: Option<Construct>,
}

impl<'g, 'a> LineScanner<'g, 'a> {
    /// Create a scanner for `line`, resuming from `state`.
    pub fn new(grammar: &'g Grammar, line: &'a str, state: ScanState) -> Self {
        Self {
            grammar,
            line,
            pos: 0,
            column: 0,
            start: 0,
            start_column: 0,
            mode: state.mode,
            continued: false,
            tokens: Vec::new(),
            unterminated: None,
        }
    }

    /// Scan `line` completely.
    pub fn scan_line(grammar: &Grammar, line: &'a str, state: ScanState) -> ScannedLine<'a> {
        LineScanner::new(grammar, line, state).scan()
    }

    /// Consume the whole line and return its tokens and end state.
    pub fn scan(mut self) -> ScannedLine<'a> {
        while !self.is_at_end() {
            match self.mode {
                ScanMode::Plain => self.scan_plain(),
                ScanMode::InLineComment => self.scan_line_comment(),
                ScanMode::InBlockComment => self.scan_block_comment(),
                ScanMode::InString { kind, delimiter } => self.scan_string(kind, delimiter),
                ScanMode::InRegex => self.scan_regex(),
            }
        }
        self.finish()
    }

    fn finish(mut self) -> ScannedLine<'a> {
        // An opener that ends the line was consumed but never emitted.
        let pending = match self.mode {
            ScanMode::Plain => TokenKind::Plain,
            ScanMode::InLineComment | ScanMode::InBlockComment => TokenKind::Comment,
            ScanMode::InString { .. } => TokenKind::StringLiteral,
            ScanMode::InRegex => TokenKind::Regex,
        };
        self.emit(pending);

        if let ScanMode::InString { kind, .. } = self.mode {
            if !kind.is_multiline() && !self.continued {
                self.mode = ScanMode::Plain;
                self.unterminated = Some(Construct::String(kind));
            }
        }

        ScannedLine {
            tokens: self.tokens,
            state: ScanState::new(self.mode).at_line_end(),
            unterminated: self.unterminated,
        }
    }

    // --- Plain mode ---

    fn scan_plain(&mut self) {
        self.start = self.pos;
        self.start_column = self.column;

        let grammar = self.grammar;
        let c = self.peek();
        let rest = self.rest();

        if c.is_whitespace() {
            while !self.is_at_end() && self.peek().is_whitespace() {
                self.advance();
            }
            self.emit(TokenKind::Whitespace);
            return;
        }

        if let Some(marker) = grammar.line_comment() {
            if rest.starts_with(marker) {
                self.advance_bytes(marker.len());
                self.mode = ScanMode::InLineComment;
                return;
            }
        }

        if let Some((open, _)) = grammar.block_comment() {
            if rest.starts_with(open) {
                self.advance_bytes(open.len());
                self.mode = ScanMode::InBlockComment;
                return;
            }
        }

        if let Some(kind) = grammar.string_kind(c) {
            self.advance();
            self.continued = false;
            self.mode = ScanMode::InString { kind, delimiter: c };
            return;
        }

        if c.is_ascii_digit() {
            self.scan_number();
            return;
        }

        if grammar.is_identifier_start(c) {
            self.scan_identifier();
            return;
        }

        if c == '/' && self.regex_allowed() && regex_body_len(&rest[1..]).is_some() {
            self.advance();
            self.mode = ScanMode::InRegex;
            return;
        }

        if let Some(op) = grammar.match_operator(rest) {
            self.advance_bytes(op.len());
            self.emit(TokenKind::Operator);
            return;
        }

        if grammar.is_punctuation(c) {
            self.advance();
            self.emit(TokenKind::Punctuation);
            return;
        }

        self.advance();
        self.emit(TokenKind::Plain);
    }

    /// Digits with at most one fractional part.
    fn scan_number(&mut self) {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while !self.is_at_end() && self.peek().is_ascii_digit() {
                self.advance();
            }
        }
        self.emit(TokenKind::Number);
    }

    fn scan_identifier(&mut self) {
        self.advance();
        while !self.is_at_end() && self.grammar.is_identifier_continue(self.peek()) {
            self.advance();
        }

        let word = &self.line[self.start..self.pos];
        let kind = if self.grammar.is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.emit(kind);
    }

    /// A `/` opens a regex only where an expression may start.
    fn regex_allowed(&self) -> bool {
        if !self.grammar.regex_literals() {
            return false;
        }

        let previous = self
            .tokens
            .iter()
            .rev()
            .find(|t| t.kind != TokenKind::Whitespace);

        match previous {
            None => true,
            Some(t) => match t.kind {
                TokenKind::Operator | TokenKind::Keyword | TokenKind::Comment => true,
                TokenKind::Punctuation => !matches!(t.text, ")" | "]" | "}"),
                _ => false,
            },
        }
    }

    // --- Mode bodies ---

    fn scan_line_comment(&mut self) {
        self.advance_bytes(self.line.len() - self.pos);
        self.emit(TokenKind::Comment);
    }

    fn scan_block_comment(&mut self) {
        let close = match self.grammar.block_comment() {
            Some((_, close)) => close,
            None => {
                // Carried in from a grammar without block comments.
                self.mode = ScanMode::Plain;
                return;
            }
        };

        match self.rest().find(close) {
            Some(offset) => {
                self.advance_bytes(offset + close.len());
                self.emit(TokenKind::Comment);
                self.mode = ScanMode::Plain;
            }
            None => {
                self.advance_bytes(self.line.len() - self.pos);
                self.emit(TokenKind::Comment);
            }
        }
    }

    fn scan_string(&mut self, kind: StringKind, delimiter: char) {
        while !self.is_at_end() {
            let c = self.peek();
            if c == '\\' {
                self.advance();
                if self.is_at_end() {
                    self.continued = true;
                    break;
                }
                self.advance();
                continue;
            }

            self.advance();
            if c == delimiter {
                self.emit(TokenKind::StringLiteral);
                self.continued = false;
                self.mode = ScanMode::Plain;
                return;
            }
        }

        // End of line with the string still open; `finish` decides whether
        // it carries over.
        self.emit(TokenKind::StringLiteral);
        self.mode = ScanMode::InString { kind, delimiter };
    }

    fn scan_regex(&mut self) {
        match regex_body_len(self.rest()) {
            Some(len) => {
                self.advance_bytes(len);
                while !self.is_at_end() && self.peek().is_ascii_alphabetic() {
                    self.advance();
                }
                self.emit(TokenKind::Regex);
                self.mode = ScanMode::Plain;
            }
            None => {
                self.advance_bytes(self.line.len() - self.pos);
                self.emit(TokenKind::Regex);
            }
        }
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind) {
        if self.pos > self.start {
            let span = Span::new(self.start, self.pos, self.start_column);
            self.tokens
                .push(Token::new(kind, &self.line[self.start..self.pos], span));
        }
        self.start = self.pos;
        self.start_column = self.column;
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.rest().chars().nth(1).unwrap_or('\0')
    }

    fn advance(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advance over `len` bytes; `len` must land on a char boundary.
    fn advance_bytes(&mut self, len: usize) {
        let end = self.pos + len;
        self.column += self.line[self.pos..end].chars().count();
        self.pos = end;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.line.len()
    }
}

/// Byte length of a regex body up to and including its closing `/`.
///
/// `text` starts just after the opening slash. Escapes and `[...]` classes
/// may contain unescaped slashes. Returns `None` when the line has no
/// closing slash or the body is empty.
fn regex_body_len(text: &str) -> Option<usize> {
    let mut in_class = false;
    let mut chars = text.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                return if i == 0 { None } else { Some(i + 1) };
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: scan one plain-state line with the JavaScript grammar.
    fn scan(line: &str) -> ScannedLine<'_> {
        scan_from(line, ScanState::PLAIN)
    }

    fn scan_from(line: &str, state: ScanState) -> ScannedLine<'_> {
        let grammar = Grammar::javascript();
        LineScanner::scan_line(&grammar, line, state)
    }

    /// Helper: (kind, text) pairs for a plain-state line.
    fn pairs(line: &str) -> Vec<(TokenKind, String)> {
        scan(line)
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.text.to_string()))
            .collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    use TokenKind::*;

    // =========================================================================
    // Basics
    // =========================================================================

    #[test]
    fn test_empty_line() {
        let out = scan("");
        assert!(out.tokens.is_empty());
        assert_eq!(out.state, ScanState::PLAIN);
        assert_eq!(out.unterminated, None);
    }

    #[test]
    fn test_whitespace_run() {
        assert_eq!(pairs(" \t "), vec![tok(Whitespace, " \t ")]);
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            pairs("var x = 10;"),
            vec![
                tok(Keyword, "var"),
                tok(Whitespace, " "),
                tok(Identifier, "x"),
                tok(Whitespace, " "),
                tok(Operator, "="),
                tok(Whitespace, " "),
                tok(Number, "10"),
                tok(Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_spans_and_columns() {
        let out = scan("é = 1");
        let spans: Vec<Span> = out.tokens.iter().map(|t| t.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(0, 2, 0),
                Span::new(2, 3, 1),
                Span::new(3, 4, 2),
                Span::new(4, 5, 3),
                Span::new(5, 6, 4),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_plain() {
        assert_eq!(
            pairs("#@\\"),
            vec![tok(Plain, "#"), tok(Plain, "@"), tok(Plain, "\\")]
        );
    }

    #[test]
    fn test_text_reconstructs_line() {
        let line = "if (a <= 3.5 && /x[/]y/g.test(s)) { return \"ok\"; } // done";
        assert_eq!(scan(line).text(), line);
    }

    #[test]
    fn test_opener_at_line_end_is_kept() {
        let cases = [
            ("//", Comment, "//", ScanState::PLAIN),
            ("x //", Comment, "//", ScanState::PLAIN),
            ("/*", Comment, "/*", ScanState::new(ScanMode::InBlockComment)),
            ("a /*", Comment, "/*", ScanState::new(ScanMode::InBlockComment)),
            ("s = \"", StringLiteral, "\"", ScanState::PLAIN),
            ("'", StringLiteral, "'", ScanState::PLAIN),
            (
                "t = `",
                StringLiteral,
                "`",
                ScanState::new(ScanMode::InString {
                    kind: StringKind::Template,
                    delimiter: '`',
                }),
            ),
        ];
        for (line, kind, text, state) in cases {
            let out = scan(line);
            assert_eq!(out.text(), line);
            assert_eq!(
                out.tokens.last().map(|t| (t.kind, t.text)),
                Some((kind, text)),
                "last token of {line:?}"
            );
            assert_eq!(out.state, state, "state after {line:?}");
        }
        assert_eq!(
            scan("s = \"").unterminated,
            Some(Construct::String(StringKind::Double))
        );
    }

    /// Every carried state a line can start in.
    fn carried_states() -> Vec<ScanState> {
        let mut states = vec![
            ScanState::PLAIN,
            ScanState::new(ScanMode::InBlockComment),
            ScanState::new(ScanMode::InLineComment),
            ScanState::new(ScanMode::InRegex),
        ];
        for (delimiter, kind) in [
            ('"', StringKind::Double),
            ('\'', StringKind::Single),
            ('`', StringKind::Template),
        ] {
            states.push(ScanState::new(ScanMode::InString { kind, delimiter }));
        }
        states
    }

    /// Lines with each delimiter fragment at the start, middle and end.
    fn delimiter_lines() -> Vec<String> {
        let fragments = ["", "//", "/*", "*/", "\"", "'", "`", "\\", "/"];
        let mut lines = Vec::new();
        for fragment in fragments {
            lines.push(fragment.to_string());
            lines.push(format!("{fragment} a"));
            lines.push(format!("a {fragment} b"));
            lines.push(format!("a {fragment}"));
            lines.push(format!("a{fragment}"));
            for other in fragments {
                lines.push(format!("{fragment}{other}"));
                lines.push(format!("{fragment} x {other}"));
            }
        }
        lines
    }

    #[test]
    fn test_opens_construct() {
        let block = ScanState::new(ScanMode::InBlockComment);
        assert!(scan("a /* b").opens_construct(ScanState::PLAIN));
        assert!(!scan("a /* b */").opens_construct(ScanState::PLAIN));
        assert!(!scan_from("still /* inside", block).opens_construct(block));
        assert!(scan_from("done */ /* again", block).opens_construct(block));
        assert!(scan_from("*//*", block).opens_construct(block));
        assert!(!scan_from("", block).opens_construct(block));
    }

    #[test]
    fn test_text_reconstructs_every_delimiter_combination() {
        let grammar = Grammar::javascript();
        for state in carried_states() {
            for line in delimiter_lines() {
                let out = LineScanner::scan_line(&grammar, &line, state);
                assert_eq!(out.text(), line, "from {state:?}");
            }
        }
    }

    // =========================================================================
    // Keywords and identifiers
    // =========================================================================

    #[test]
    fn test_keyword_exact_match() {
        assert_eq!(pairs("functionName"), vec![tok(Identifier, "functionName")]);
        assert_eq!(pairs("function"), vec![tok(Keyword, "function")]);
    }

    #[test]
    fn test_keyword_case_sensitive() {
        assert_eq!(pairs("Return"), vec![tok(Identifier, "Return")]);
    }

    #[test]
    fn test_identifier_with_dollar_and_digits() {
        assert_eq!(pairs("$el2"), vec![tok(Identifier, "$el2")]);
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_integer_and_fraction() {
        assert_eq!(pairs("42"), vec![tok(Number, "42")]);
        assert_eq!(pairs("3.14"), vec![tok(Number, "3.14")]);
    }

    #[test]
    fn test_only_one_fractional_part() {
        assert_eq!(
            pairs("1.2.3"),
            vec![tok(Number, "1.2"), tok(Punctuation, "."), tok(Number, "3")]
        );
    }

    #[test]
    fn test_trailing_dot_is_punctuation() {
        assert_eq!(
            pairs("1.toString"),
            vec![
                tok(Number, "1"),
                tok(Punctuation, "."),
                tok(Identifier, "toString"),
            ]
        );
    }

    // =========================================================================
    // Operators and punctuation
    // =========================================================================

    #[test]
    fn test_longest_operator_first() {
        assert_eq!(
            pairs("a===b"),
            vec![tok(Identifier, "a"), tok(Operator, "==="), tok(Identifier, "b")]
        );
        assert_eq!(
            pairs("x=>x"),
            vec![tok(Identifier, "x"), tok(Operator, "=>"), tok(Identifier, "x")]
        );
    }

    #[test]
    fn test_spread_is_one_operator() {
        assert_eq!(
            pairs("...args"),
            vec![tok(Operator, "..."), tok(Identifier, "args")]
        );
    }

    #[test]
    fn test_brackets_are_punctuation() {
        assert_eq!(
            pairs("f([{}])"),
            vec![
                tok(Identifier, "f"),
                tok(Punctuation, "("),
                tok(Punctuation, "["),
                tok(Punctuation, "{"),
                tok(Punctuation, "}"),
                tok(Punctuation, "]"),
                tok(Punctuation, ")"),
            ]
        );
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_line_comment_to_end() {
        let out = scan("x; // note /* not a block");
        assert_eq!(
            out.tokens.last().map(|t| (t.kind, t.text)),
            Some((Comment, "// note /* not a block"))
        );
        assert_eq!(out.state, ScanState::PLAIN);
    }

    #[test]
    fn test_block_comment_inline() {
        assert_eq!(
            pairs("a /* b */ c"),
            vec![
                tok(Identifier, "a"),
                tok(Whitespace, " "),
                tok(Comment, "/* b */"),
                tok(Whitespace, " "),
                tok(Identifier, "c"),
            ]
        );
    }

    #[test]
    fn test_block_comment_opener_does_not_close_itself() {
        let out = scan("/*/ still open");
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.state.mode, ScanMode::InBlockComment);
    }

    #[test]
    fn test_block_comment_carries_across_lines() {
        let first = scan("code(); /* start");
        assert_eq!(first.state.mode, ScanMode::InBlockComment);
        assert_eq!(first.unterminated, None);

        let second = scan_from("end */ more", first.state);
        assert_eq!(
            second.tokens[0].kind,
            Comment,
            "closing delimiter belongs to the comment"
        );
        assert_eq!(second.tokens[0].text, "end */");
        assert_eq!(second.state, ScanState::PLAIN);
    }

    #[test]
    fn test_block_comment_middle_line() {
        let state = ScanState::new(ScanMode::InBlockComment);
        let out = scan_from("  \"not a string\" ", state);
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.tokens[0].kind, Comment);
        assert_eq!(out.state, state);
    }

    #[test]
    fn test_empty_line_keeps_block_comment_open() {
        let state = ScanState::new(ScanMode::InBlockComment);
        assert_eq!(scan_from("", state).state, state);
    }

    // =========================================================================
    // Strings
    // =========================================================================

    #[test]
    fn test_double_and_single_quoted() {
        assert_eq!(
            pairs("\"a\" + 'b'"),
            vec![
                tok(StringLiteral, "\"a\""),
                tok(Whitespace, " "),
                tok(Operator, "+"),
                tok(Whitespace, " "),
                tok(StringLiteral, "'b'"),
            ]
        );
    }

    #[test]
    fn test_escaped_delimiter_does_not_close() {
        let out = scan(r#""a\"b""#);
        assert_eq!(
            out.tokens.iter().map(|t| (t.kind, t.text)).collect::<Vec<_>>(),
            vec![(StringLiteral, r#""a\"b""#)]
        );
        assert_eq!(out.state, ScanState::PLAIN);
        assert_eq!(out.unterminated, None);
    }

    #[test]
    fn test_escaped_backslash_then_close() {
        assert_eq!(
            pairs(r#"'a\\' b"#),
            vec![
                tok(StringLiteral, r#"'a\\'"#),
                tok(Whitespace, " "),
                tok(Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_other_quote_inside_string() {
        assert_eq!(pairs(r#""it's""#), vec![tok(StringLiteral, r#""it's""#)]);
    }

    #[test]
    fn test_comment_markers_inside_string() {
        assert_eq!(
            pairs("'// no' /* yes */"),
            vec![
                tok(StringLiteral, "'// no'"),
                tok(Whitespace, " "),
                tok(Comment, "/* yes */"),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_defensive_close() {
        let out = scan("\"abc");
        assert_eq!(
            out.tokens.iter().map(|t| (t.kind, t.text)).collect::<Vec<_>>(),
            vec![(StringLiteral, "\"abc")]
        );
        assert_eq!(out.state, ScanState::PLAIN);
        assert_eq!(out.unterminated, Some(Construct::String(StringKind::Double)));
    }

    #[test]
    fn test_line_continuation_carries_string() {
        let out = scan("'abc\\");
        assert_eq!(
            out.state.mode,
            ScanMode::InString {
                kind: StringKind::Single,
                delimiter: '\''
            }
        );
        assert_eq!(out.unterminated, None);

        let next = scan_from("def' + x", out.state);
        assert_eq!(next.tokens[0].kind, StringLiteral);
        assert_eq!(next.tokens[0].text, "def'");
        assert_eq!(next.state, ScanState::PLAIN);
    }

    #[test]
    fn test_template_string_carries_without_continuation() {
        let out = scan("const s = `first");
        assert_eq!(out.state.string_delimiter(), Some('`'));
        assert_eq!(out.unterminated, None);

        let next = scan_from("second` ;", out.state);
        assert_eq!(next.tokens[0].text, "second`");
        assert_eq!(next.state, ScanState::PLAIN);
    }

    #[test]
    fn test_carried_quote_string_closed_on_empty_line() {
        let state = ScanState::new(ScanMode::InString {
            kind: StringKind::Double,
            delimiter: '"',
        });
        let out = scan_from("", state);
        assert_eq!(out.state, ScanState::PLAIN);
        assert_eq!(out.unterminated, Some(Construct::String(StringKind::Double)));
    }

    // =========================================================================
    // Regex literals
    // =========================================================================

    #[test]
    fn test_regex_after_operator() {
        assert_eq!(
            pairs("r = /a+b/gi;"),
            vec![
                tok(Identifier, "r"),
                tok(Whitespace, " "),
                tok(Operator, "="),
                tok(Whitespace, " "),
                tok(Regex, "/a+b/gi"),
                tok(Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_regex_class_may_contain_slash() {
        assert_eq!(
            pairs("(/[/]x/)"),
            vec![
                tok(Punctuation, "("),
                tok(Regex, "/[/]x/"),
                tok(Punctuation, ")"),
            ]
        );
    }

    #[test]
    fn test_division_after_identifier() {
        assert_eq!(
            pairs("a / b / c"),
            vec![
                tok(Identifier, "a"),
                tok(Whitespace, " "),
                tok(Operator, "/"),
                tok(Whitespace, " "),
                tok(Identifier, "b"),
                tok(Whitespace, " "),
                tok(Operator, "/"),
                tok(Whitespace, " "),
                tok(Identifier, "c"),
            ]
        );
    }

    #[test]
    fn test_division_after_closing_paren() {
        let kinds: Vec<TokenKind> = scan("(a) / 2 / 3").tokens.iter().map(|t| t.kind).collect();
        assert!(!kinds.contains(&Regex));
    }

    #[test]
    fn test_slash_without_terminator_is_operator() {
        assert_eq!(pairs("= /x"), vec![
            tok(Operator, "="),
            tok(Whitespace, " "),
            tok(Operator, "/"),
            tok(Identifier, "x"),
        ]);
    }

    #[test]
    fn test_regex_disabled_by_grammar() {
        let grammar = crate::GrammarBuilder::new("plain")
            .operators(["/", "="])
            .build()
            .unwrap();
        let out = LineScanner::scan_line(&grammar, "= /x/", ScanState::PLAIN);
        assert!(out.tokens.iter().all(|t| t.kind != Regex));
    }

    #[test]
    fn test_regex_mode_never_carries() {
        let out = scan_from("abc", ScanState::new(ScanMode::InRegex));
        assert_eq!(out.tokens[0].kind, Regex);
        assert_eq!(out.state, ScanState::PLAIN);
    }

    #[test]
    fn test_regex_body_len() {
        assert_eq!(regex_body_len("ab/"), Some(3));
        assert_eq!(regex_body_len("a\\/b/"), Some(5));
        assert_eq!(regex_body_len("/"), None);
        assert_eq!(regex_body_len("[/"), None);
    }

    // =========================================================================
    // Purity
    // =========================================================================

    #[test]
    fn test_repeated_scans_are_identical() {
        let line = "let s = 'x' /* y";
        assert_eq!(scan(line), scan(line));
    }
}
