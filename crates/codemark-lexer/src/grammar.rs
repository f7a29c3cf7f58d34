//! Static rule tables that drive classification.
//!
//! A [`Grammar`] is built once, validated, and then only read. Scanners
//! borrow it, so a single grammar can serve any number of threads.

use std::collections::HashSet;

use serde::Deserialize;

use crate::state::StringKind;

/// Error raised while building a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Invalid grammar file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Operators must be non-empty and contain no whitespace: {0:?}")]
    InvalidOperator(String),
    #[error("Comment markers must be non-empty")]
    EmptyCommentMarker,
    #[error("Invalid string delimiter: {0:?}")]
    InvalidStringDelimiter(char),
    #[error("String delimiter {0:?} is declared twice")]
    DuplicateStringDelimiter(char),
    #[error("Unknown string kind: {0:?} (expected single, double or template)")]
    UnknownStringKind(String),
}

/// A character that opens (and closes) a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDelimiter {
    pub delimiter: char,
    pub kind: StringKind,
}

/// Immutable highlighting rules for one language.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    keywords: HashSet<String>,
    /// Sorted longest first so the first prefix match is the longest one.
    operators: Vec<String>,
    punctuation: Vec<char>,
    line_comment: Option<String>,
    block_comment: Option<(String, String)>,
    strings: Vec<StringDelimiter>,
    regex_literals: bool,
    identifier_chars: Vec<char>,
}

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
    "function", "if", "import", "in", "instanceof", "let", "new", "null", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void",
    "while", "with", "yield",
];

const JS_OPERATORS: &[&str] = &[
    ">>>=", "===", "!==", "**=", "<<=", ">>=", ">>>", "...", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^",
    "~", "?", ":",
];

const JS_PUNCTUATION: &[char] = &['(', ')', '[', ']', '{', '}', ';', ',', '.'];

impl Grammar {
    /// The built-in JavaScript grammar.
    pub fn javascript() -> Grammar {
        GrammarBuilder::new("javascript")
            .keywords(JS_KEYWORDS.iter().copied())
            .operators(JS_OPERATORS.iter().copied())
            .punctuation(JS_PUNCTUATION.iter().copied())
            .line_comment("//")
            .block_comment("/*", "*/")
            .string('"', StringKind::Double)
            .string('\'', StringKind::Single)
            .string('`', StringKind::Template)
            .regex_literals(true)
            .identifier_chars(['$'])
            .build()
            // The constant tables above satisfy every builder check.
            .expect("built-in grammar is valid")
    }

    /// Load a grammar from a JSON description.
    ///
    /// Missing tables are empty; missing comment markers disable comments.
    pub fn from_json(source: &str) -> Result<Grammar, GrammarError> {
        let file: GrammarFile = serde_json::from_str(source)?;
        file.into_grammar()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// The longest operator that prefixes `rest`, if any.
    pub fn match_operator(&self, rest: &str) -> Option<&str> {
        self.operators
            .iter()
            .find(|op| rest.starts_with(op.as_str()))
            .map(String::as_str)
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    pub fn block_comment(&self) -> Option<(&str, &str)> {
        self.block_comment
            .as_ref()
            .map(|(open, close)| (open.as_str(), close.as_str()))
    }

    /// The string flavor opened by `c`, if `c` is a string delimiter.
    pub fn string_kind(&self, c: char) -> Option<StringKind> {
        self.strings
            .iter()
            .find(|s| s.delimiter == c)
            .map(|s| s.kind)
    }

    pub fn regex_literals(&self) -> bool {
        self.regex_literals
    }

    pub fn is_identifier_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_' || self.identifier_chars.contains(&c)
    }

    pub fn is_identifier_continue(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || self.identifier_chars.contains(&c)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::javascript()
    }
}

/// Step-by-step construction of a [`Grammar`]; validation happens in `build`.
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    name: String,
    keywords: Vec<String>,
    operators: Vec<String>,
    punctuation: Vec<char>,
    line_comment: Option<String>,
    block_comment: Option<(String, String)>,
    strings: Vec<StringDelimiter>,
    regex_literals: bool,
    identifier_chars: Vec<char>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators.extend(operators.into_iter().map(Into::into));
        self
    }

    pub fn punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.punctuation.extend(chars);
        self
    }

    pub fn line_comment(mut self, marker: impl Into<String>) -> Self {
        self.line_comment = Some(marker.into());
        self
    }

    pub fn block_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.block_comment = Some((open.into(), close.into()));
        self
    }

    pub fn string(mut self, delimiter: char, kind: StringKind) -> Self {
        self.strings.push(StringDelimiter { delimiter, kind });
        self
    }

    pub fn regex_literals(mut self, enabled: bool) -> Self {
        self.regex_literals = enabled;
        self
    }

    pub fn identifier_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.identifier_chars.extend(chars);
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(op) = self
            .operators
            .iter()
            .find(|op| op.is_empty() || op.chars().any(char::is_whitespace))
        {
            return Err(GrammarError::InvalidOperator(op.clone()));
        }

        let empty_line_marker = self.line_comment.as_ref().is_some_and(String::is_empty);
        let empty_block_marker = self
            .block_comment
            .as_ref()
            .is_some_and(|(open, close)| open.is_empty() || close.is_empty());
        if empty_line_marker || empty_block_marker {
            return Err(GrammarError::EmptyCommentMarker);
        }

        let mut seen = HashSet::new();
        for s in &self.strings {
            let c = s.delimiter;
            if c.is_whitespace() || c.is_alphanumeric() || c == '_' || c == '\\' {
                return Err(GrammarError::InvalidStringDelimiter(c));
            }
            if !seen.insert(c) {
                return Err(GrammarError::DuplicateStringDelimiter(c));
            }
        }

        let mut operators = self.operators;
        operators.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        operators.dedup();

        Ok(Grammar {
            name: self.name,
            keywords: self.keywords.into_iter().collect(),
            operators,
            punctuation: self.punctuation,
            line_comment: self.line_comment,
            block_comment: self.block_comment,
            strings: self.strings,
            regex_literals: self.regex_literals,
            identifier_chars: self.identifier_chars,
        })
    }
}

/// On-disk grammar description.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GrammarFile {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    operators: Vec<String>,
    #[serde(default)]
    punctuation: Vec<char>,
    line_comment: Option<String>,
    block_comment: Option<(String, String)>,
    #[serde(default)]
    strings: Vec<StringEntry>,
    #[serde(default)]
    regex_literals: bool,
    #[serde(default)]
    identifier_chars: Vec<char>,
}

#[derive(Debug, Deserialize)]
struct StringEntry {
    delimiter: char,
    kind: String,
}

impl GrammarFile {
    fn into_grammar(self) -> Result<Grammar, GrammarError> {
        let mut builder = GrammarBuilder::new(self.name)
            .keywords(self.keywords)
            .operators(self.operators)
            .punctuation(self.punctuation)
            .regex_literals(self.regex_literals)
            .identifier_chars(self.identifier_chars);

        if let Some(marker) = self.line_comment {
            builder = builder.line_comment(marker);
        }
        if let Some((open, close)) = self.block_comment {
            builder = builder.block_comment(open, close);
        }
        for entry in self.strings {
            let kind = StringKind::from_name(&entry.kind)
                .ok_or_else(|| GrammarError::UnknownStringKind(entry.kind.clone()))?;
            builder = builder.string(entry.delimiter, kind);
        }

        builder.build()
    }
}
