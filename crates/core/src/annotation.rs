//! Directive grammar.
//!
//! ```text
//! @<key>                 -> boolean true
//! @<key>:true|false      -> boolean
//! @<key>:"<value>"       -> string (quotes optional)
//! @<key>="<value>"       -> string (legacy form)
//! ```
//!
//! The `:` form is checked before the `=` form, so `@key:a=b` is a `:` directive with the
//! string value `a=b`.

use crate::config::EnumConfig;
use crate::error::AnnotationError;

/// Marker every directive starts with.
pub const MARKER: char = '@';

/// Value part of a parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    /// Bare `@key`; sets a boolean option to `true`.
    Flag,
    /// `@key:true` / `@key:false`.
    Bool(bool),
    /// `@key:"value"` / `@key=value`, quotes already stripped.
    Text(String),
}

/// A directive that passed the grammar but has not been applied to a configuration yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: DirectiveValue,
}

impl Directive {
    /// Parses one directive string.
    ///
    /// Returns `Ok(None)` for blank input.
    pub fn parse(raw: &str) -> Result<Option<Self>, AnnotationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let malformed = || AnnotationError::MalformedDirective { directive: trimmed.to_owned() };
        let body = trimmed.strip_prefix(MARKER).ok_or_else(malformed)?;

        let (key, value) = if let Some((key, value)) = body.split_once(':') {
            let value = match value.trim() {
                "true" => DirectiveValue::Bool(true),
                "false" => DirectiveValue::Bool(false),
                other => DirectiveValue::Text(unquote(other).to_owned()),
            };
            (key, value)
        } else if let Some((key, value)) = body.split_once('=') {
            (key, DirectiveValue::Text(unquote(value.trim()).to_owned()))
        } else {
            (body, DirectiveValue::Flag)
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }

        Ok(Some(Self { key: key.to_owned(), value }))
    }
}

/// Parses `raw` and applies it to `config`.
///
/// A blank directive is a no-op. On error `config` is left untouched.
pub fn parse_annotation(raw: &str, config: &mut EnumConfig) -> Result<(), AnnotationError> {
    match Directive::parse(raw)? {
        Some(directive) => config.apply(&directive),
        None => Ok(()),
    }
}

/// Strips one layer of matching `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}
