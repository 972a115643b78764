//! Runtime behavior of the planned artifacts.
//!
//! Renderers reproduce these in the target language; tests use them to pin the behavior down
//! without going through text generation.

use super::{ArtifactKind, GenerationPlan, PlannedValue, WireKind};
use crate::error::InvalidValue;
use serde::Serialize;

/// Input handed to a generated SQL `Scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlInput<'a> {
    Text(&'a str),
    Ordinal(i64),
}

/// Output of a generated SQL `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlOutput<'a> {
    Text(&'a str),
    Ordinal(i64),
}

impl SqlOutput<'_> {
    pub const fn kind(&self) -> WireKind {
        match self {
            Self::Text(_) => WireKind::String,
            Self::Ordinal(_) => WireKind::Ordinal,
        }
    }
}

impl GenerationPlan {
    /// Literal name of the value at `ordinal`.
    pub fn stringify(&self, ordinal: usize) -> Option<&str> {
        self.values.get(ordinal).map(|value| value.literal.as_str())
    }

    /// Looks `input` up the way the generated parse function does.
    ///
    /// Exact literal first; then, with lowercase lookup, the lowercase spelling of each literal;
    /// then, when case-insensitive, the lowercased input. Declaration order breaks ties.
    pub fn parse(&self, input: &str) -> Result<&PlannedValue, InvalidValue> {
        self.lookup(input).ok_or_else(|| self.invalid(input))
    }

    /// Whether [`parse`](Self::parse) would succeed.
    pub fn is_valid(&self, input: &str) -> bool {
        self.lookup(input).is_some()
    }

    /// Wire text written by the generated marshaller; `None` when marshalling is not planned.
    pub fn marshal(&self, ordinal: usize) -> Option<&str> {
        if !self.has(ArtifactKind::MarshalText) {
            return None;
        }
        self.stringify(ordinal)
    }

    /// Reads wire text back; `None` when unmarshalling is not planned.
    pub fn unmarshal(&self, text: &str) -> Option<Result<&PlannedValue, InvalidValue>> {
        self.has(ArtifactKind::UnmarshalText).then(|| self.parse(text))
    }

    /// Generated `Scan`; `None` when the SQL pair is not planned.
    pub fn scan(&self, input: SqlInput<'_>) -> Option<Result<&PlannedValue, InvalidValue>> {
        let rule = self.sql.as_ref()?;

        Some(match input {
            SqlInput::Text(text) => self.parse(text),
            SqlInput::Ordinal(ordinal) => {
                let found = rule
                    .accepts(WireKind::Ordinal)
                    .then(|| usize::try_from(ordinal).ok())
                    .flatten()
                    .and_then(|index| self.values.get(index));
                found.ok_or_else(|| self.invalid(&ordinal.to_string()))
            },
        })
    }

    /// Generated nullable-wrapper `Scan`: `NULL` maps to no value.
    /// `None` when no wrapper is planned.
    pub fn scan_nullable(
        &self,
        input: Option<SqlInput<'_>>,
    ) -> Option<Result<Option<&PlannedValue>, InvalidValue>> {
        if self.null_wrappers.is_empty() {
            return None;
        }
        match input {
            None => Some(Ok(None)),
            Some(input) => self.scan(input).map(|result| result.map(Some)),
        }
    }

    /// Generated `Value`; `None` when the SQL pair is not planned or `ordinal` is out of range.
    pub fn sql_value(&self, ordinal: usize) -> Option<SqlOutput<'_>> {
        let rule = self.sql.as_ref()?;
        let value = self.values.get(ordinal)?;

        match rule.value_kind {
            WireKind::String => Some(SqlOutput::Text(&value.literal)),
            WireKind::Ordinal => i64::try_from(value.ordinal).ok().map(SqlOutput::Ordinal),
        }
    }

    fn lookup(&self, input: &str) -> Option<&PlannedValue> {
        if let Some(value) = self.values.iter().find(|value| value.literal == input) {
            return Some(value);
        }

        let rule = self.parse.as_ref()?;
        if rule.lowercase_lookup
            && let Some(value) = self.values.iter().find(|value| value.literal.to_lowercase() == input)
        {
            return Some(value);
        }
        if rule.case_insensitive {
            let folded = input.to_lowercase();
            return self.values.iter().find(|value| value.literal.to_lowercase() == folded);
        }

        None
    }

    fn invalid(&self, input: &str) -> InvalidValue {
        InvalidValue { input: input.to_owned(), type_name: self.type_name.clone() }
    }
}
