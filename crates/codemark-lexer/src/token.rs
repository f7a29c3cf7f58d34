/// A byte range within a single line, plus the character column it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, column: usize) -> Self {
        Self { start, end, column }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lexical classification of a token.
///
/// Classification is purely lexical: an `Identifier` is any name that is not
/// in the grammar's keyword dictionary, whatever it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    Comment,
    Regex,
    Operator,
    Punctuation,
    Whitespace,
    Plain,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::StringLiteral,
        TokenKind::Comment,
        TokenKind::Regex,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Whitespace,
        TokenKind::Plain,
    ];

    /// The name used for this kind in configuration objects.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::Comment => "comment",
            TokenKind::Regex => "regex",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Plain => "plain",
        }
    }

    /// Inverse of [`TokenKind::name`].
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A maximal run of one classification within a line.
///
/// `text` borrows the scanned line, so tokens never outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }
}
