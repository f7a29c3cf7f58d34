//! Token to markup rendering.
//!
//! Each token becomes its escaped text, wrapped in the tag configured for its
//! kind. Tokens never overlap, so tags nest trivially. Only markup is ever
//! added: stripping the tags and unescaping gives back the line.

use codemark_config::PrettyConfig;
use codemark_lexer::{Token, TokenKind};

use crate::escape::{escape_attr, escape_text};

/// Render `tokens` into `out` using the style table in `pretty`.
pub fn render_tokens(tokens: &[Token<'_>], pretty: &PrettyConfig, out: &mut String) {
    for token in tokens {
        let rule = pretty.styles.get(token.kind);

        if let Some(rule) = rule {
            out.push('<');
            out.push_str(&rule.tag);
            out.push_str(" class=\"");
            out.push_str(&rule.class);
            out.push_str("\">");
        }

        if token.kind == TokenKind::Comment && pretty.comment_links {
            render_comment_links(token.text, out);
        } else {
            escape_text(token.text, out);
        }

        if let Some(rule) = rule {
            out.push_str("</");
            out.push_str(&rule.tag);
            out.push('>');
        }
    }
}

/// Escape comment text, wrapping each `[label](url)` in an anchor. The
/// bracketed text itself stays inside the anchor unchanged.
fn render_comment_links(text: &str, out: &mut String) {
    let mut rest = text;

    while let Some((before, link, url, after)) = next_link(rest) {
        escape_text(before, out);
        out.push_str("<a href=\"");
        escape_attr(url, out);
        out.push_str("\" target=\"_blank\">");
        escape_text(link, out);
        out.push_str("</a>");
        rest = after;
    }

    escape_text(rest, out);
}

/// Find the first `[label](url)` in `text`.
///
/// Returns the text before it, the whole link text, the url, and the text
/// after it.
fn next_link(text: &str) -> Option<(&str, &str, &str, &str)> {
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('[') {
        let open = search_from + offset;
        search_from = open + 1;

        let Some(label_len) = text[open + 1..].find(']') else {
            return None;
        };
        let close = open + 1 + label_len;
        if label_len == 0 || text[open + 1..close].contains('[') {
            continue;
        }
        if !text[close + 1..].starts_with('(') {
            continue;
        }

        let url_start = close + 2;
        let Some(url_len) = text[url_start..].find(')') else {
            continue;
        };
        let url = &text[url_start..url_start + url_len];
        if url.is_empty() || url.chars().any(char::is_whitespace) || !is_safe_url(url) {
            continue;
        }

        let end = url_start + url_len + 1;
        return Some((&text[..open], &text[open..end], url, &text[end..]));
    }

    None
}

/// Reject script-bearing schemes; relative links and http(s)/mailto pass.
fn is_safe_url(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) if !scheme.contains('/') => matches!(
            scheme.to_ascii_lowercase().as_str(),
            "http" | "https" | "mailto"
        ),
        _ => true,
    }
}
