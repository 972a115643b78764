//! Helpers for the comment block that precedes an enum declaration.
//!
//! ```text
//! // @marshal:true @sql:false @prefix:"My"
//! // ENUM(pending, running, completed, failed)
//! ```
//!
//! Finding the declaration itself is left to the caller.

use crate::annotation::MARKER;
use crate::spec::{EnumRepr, EnumSpec};

const ENUM_MARKER: &str = "ENUM(";

/// Splits a comment line into directive strings.
///
/// A directive starts at every `@` that begins a whitespace-separated word and ends at the next
/// whitespace outside a quoted value. Any other text on the line is ignored.
pub fn split_directives(line: &str) -> Vec<String> {
    let mut directives = Vec::new();
    let mut current: Option<String> = None;
    let mut quote: Option<char> = None;
    let mut prev = ' ';

    for ch in strip_comment(line).chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => {},
            None if ch == MARKER && prev.is_whitespace() => {
                push_directive(&mut directives, current.take());
                current = Some(String::new());
            },
            None if matches!(ch, '"' | '\'') && matches!(prev, ':' | '=') => quote = Some(ch),
            None if ch.is_whitespace() => push_directive(&mut directives, current.take()),
            None => {},
        }

        if let Some(buf) = current.as_mut() {
            buf.push(ch);
        }
        prev = ch;
    }
    push_directive(&mut directives, current);

    directives
}

/// Extracts the comma-separated literals of an `ENUM(...)` marker, which may span lines.
pub fn parse_enum_marker(text: &str) -> Option<Vec<String>> {
    let start = text.find(ENUM_MARKER)? + ENUM_MARKER.len();
    let end = start + text[start..].find(')')?;

    Some(
        text[start..end]
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
    )
}

impl EnumSpec {
    /// Assembles a spec from the comment lines above a declaration: directives from every line,
    /// values from the `ENUM(...)` marker (empty when there is none).
    pub fn from_comments<I, S>(type_name: impl Into<String>, repr: EnumRepr, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw_annotations = Vec::new();
        let mut body = String::new();

        for line in lines {
            let text = strip_comment(line.as_ref());
            if !text.contains(ENUM_MARKER) {
                raw_annotations.extend(split_directives(text));
            }
            body.push_str(text);
            body.push('\n');
        }

        Self {
            type_name: type_name.into(),
            repr,
            values: parse_enum_marker(&body).unwrap_or_default(),
            raw_annotations,
        }
    }
}

fn strip_comment(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix("//").unwrap_or(line)
}

fn push_directive(directives: &mut Vec<String>, directive: Option<String>) {
    if let Some(directive) = directive {
        let directive = directive.trim();
        if !directive.is_empty() {
            directives.push(directive.to_owned());
        }
    }
}
