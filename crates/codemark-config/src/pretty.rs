//! Prettifier settings: line preparation and the token style table.

use std::collections::BTreeMap;

use codemark_lexer::TokenKind;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::lenient;

/// Default number of spaces substituted for a tab.
pub const DEFAULT_TAB_LENGTH: usize = 2;

/// How one token kind is wrapped: `<tag class="class">text</tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub tag: String,
    pub class: String,
}

impl StyleRule {
    /// A `span` with the given class.
    pub fn span(class: impl Into<String>) -> Self {
        Self {
            tag: "span".into(),
            class: class.into(),
        }
    }

    /// Build a rule from a config value: a class string, or an object with
    /// `tag` and `class`. Returns `None` for anything unusable.
    fn from_value(value: &Value) -> Option<StyleRule> {
        let (tag, class) = match value {
            Value::String(class) => ("span", class.as_str()),
            Value::Object(map) => (
                map.get("tag").and_then(Value::as_str).unwrap_or("span"),
                map.get("class").and_then(Value::as_str)?,
            ),
            _ => return None,
        };

        if !is_valid_tag(tag) || !is_valid_class(class) {
            return None;
        }
        Some(StyleRule {
            tag: tag.to_string(),
            class: class.to_string(),
        })
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_valid_class(class: &str) -> bool {
    !class.trim().is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
}

/// Token kind to wrapping rule. Kinds without a rule are emitted unwrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    rules: BTreeMap<TokenKind, StyleRule>,
}

impl StyleTable {
    /// A table that wraps nothing.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn get(&self, kind: TokenKind) -> Option<&StyleRule> {
        self.rules.get(&kind)
    }

    /// Return a copy with `kind` mapped to `rule` (or unwrapped for `None`).
    pub fn with(mut self, kind: TokenKind, rule: Option<StyleRule>) -> Self {
        match rule {
            Some(rule) => self.rules.insert(kind, rule),
            None => self.rules.remove(&kind),
        };
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, &StyleRule)> {
        self.rules.iter().map(|(kind, rule)| (*kind, rule))
    }

    /// Apply user overrides on top of this table.
    ///
    /// Keys are token kind names. `null` removes wrapping; invalid values and
    /// unknown kinds are ignored.
    fn merge(mut self, overrides: &serde_json::Map<String, Value>) -> Self {
        for (name, value) in overrides {
            let Some(kind) = TokenKind::from_name(name) else {
                continue;
            };
            if value.is_null() {
                self.rules.remove(&kind);
            } else if let Some(rule) = StyleRule::from_value(value) {
                self.rules.insert(kind, rule);
            }
        }
        self
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        let rules = [
            (TokenKind::Keyword, "key"),
            (TokenKind::Identifier, "idt"),
            (TokenKind::Number, "num"),
            (TokenKind::StringLiteral, "str"),
            (TokenKind::Comment, "cmt"),
            (TokenKind::Regex, "rgx"),
            (TokenKind::Operator, "opr"),
            (TokenKind::Punctuation, "pct"),
        ]
        .into_iter()
        .map(|(kind, class)| (kind, StyleRule::span(class)))
        .collect();

        Self { rules }
    }
}

/// Settings for the code prettifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Leading indentation columns removed from every line.
    pub trim_space: usize,
    /// Spaces substituted for each tab.
    pub tab_length: usize,
    /// Turn `[label](url)` inside comments into links.
    pub comment_links: bool,
    pub styles: StyleTable,
}

impl PrettyConfig {
    /// Read from a `prettyCode` object. Never fails; bad values keep defaults.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            return defaults;
        };

        let styles = match map.get("styles").and_then(Value::as_object) {
            Some(overrides) => defaults.styles.merge(overrides),
            None => defaults.styles,
        };

        Self {
            trim_space: lenient::count(map.get("trimSpace")).unwrap_or(defaults.trim_space),
            tab_length: lenient::count(map.get("tabLength")).unwrap_or(defaults.tab_length),
            comment_links: matches!(map.get("commentLinks"), Some(Value::Bool(true))),
            styles,
        }
    }

    pub fn with_trim_space(self, trim_space: usize) -> Self {
        Self { trim_space, ..self }
    }

    pub fn with_tab_length(self, tab_length: usize) -> Self {
        Self { tab_length, ..self }
    }

    pub fn with_comment_links(self, comment_links: bool) -> Self {
        Self {
            comment_links,
            ..self
        }
    }

    pub fn with_styles(self, styles: StyleTable) -> Self {
        Self { styles, ..self }
    }
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            trim_space: 0,
            tab_length: DEFAULT_TAB_LENGTH,
            comment_links: false,
            styles: StyleTable::default(),
        }
    }
}

impl<'de> Deserialize<'de> for PrettyConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(PrettyConfig::from_value(&value))
    }
}
