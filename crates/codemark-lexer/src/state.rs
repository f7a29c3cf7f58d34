/// Flavor of an open string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    Single,
    Double,
    /// Backtick strings, which may span lines.
    Template,
}

impl StringKind {
    /// Whether the string may continue onto the next line without a
    /// trailing backslash.
    pub fn is_multiline(self) -> bool {
        matches!(self, StringKind::Template)
    }

    pub fn name(self) -> &'static str {
        match self {
            StringKind::Single => "single",
            StringKind::Double => "double",
            StringKind::Template => "template",
        }
    }

    pub fn from_name(name: &str) -> Option<StringKind> {
        match name {
            "single" => Some(StringKind::Single),
            "double" => Some(StringKind::Double),
            "template" => Some(StringKind::Template),
            _ => None,
        }
    }
}

/// The token context the scanner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Plain,
    /// Inside a line comment. Always reset to `Plain` at line end.
    InLineComment,
    InBlockComment,
    InString {
        kind: StringKind,
        delimiter: char,
    },
    /// Inside a regex literal. Always reset to `Plain` at line end.
    InRegex,
}

/// Scanner state carried from the end of one line to the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub mode: ScanMode,
}

impl ScanState {
    /// State at the top of a document.
    pub const PLAIN: ScanState = ScanState {
        mode: ScanMode::Plain,
    };

    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn is_plain(&self) -> bool {
        self.mode == ScanMode::Plain
    }

    /// The character that opened the current string, if one is open.
    pub fn string_delimiter(&self) -> Option<char> {
        match self.mode {
            ScanMode::InString { delimiter, .. } => Some(delimiter),
            _ => None,
        }
    }

    /// Collapse the single-line modes that cannot survive a line break.
    pub(crate) fn at_line_end(self) -> Self {
        match self.mode {
            ScanMode::InLineComment | ScanMode::InRegex => ScanState::PLAIN,
            _ => self,
        }
    }
}
