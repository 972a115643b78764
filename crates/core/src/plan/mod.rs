//! Artifact planning.
//!
//! [`plan`] turns a resolved configuration and a value list into a [`GenerationPlan`]: the
//! complete, renderer-ready list of artifacts plus the parameters that shape each of them.
//! The renderer must not look at raw directives again.

mod artifact;
mod semantics;

pub use artifact::{ArtifactKind, ArtifactSet};
pub use semantics::{SqlInput, SqlOutput};

use crate::config::{BoolOption, EnumConfig};
use crate::error::PlanError;
use crate::naming::derive_identifier;
use crate::spec::{EnumRepr, EnumSpec};
use fxhash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Options that need a generated parse step to work.
const NEEDS_PARSE: [BoolOption; 6] = [
    BoolOption::Marshal,
    BoolOption::Sql,
    BoolOption::Flag,
    BoolOption::MustParse,
    BoolOption::SqlNullInt,
    BoolOption::SqlNullStr,
];

/// How a value travels over a wire (SQL column, JSON text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WireKind {
    /// The literal name.
    String,
    /// The declaration index.
    Ordinal,
}

/// One enum value with its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedValue {
    pub literal: String,
    pub identifier: String,
    pub ordinal: usize,
}

/// Shape of the generated parse function. Failures render as
/// `"<input> is not a valid <TypeName>"`, see [`InvalidValue`](crate::InvalidValue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseRule {
    pub type_name: String,
    /// Accept the all-lowercase spelling of each literal.
    pub lowercase_lookup: bool,
    /// Lowercase the input before the lowercase lookup.
    pub case_insensitive: bool,
}

/// Shape of the generated SQL `Scan`/`Value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlRule {
    /// What `Value` emits.
    pub value_kind: WireKind,
    /// What `Scan` accepts.
    pub scan_accepts: Vec<WireKind>,
}

impl SqlRule {
    pub fn accepts(&self, kind: WireKind) -> bool {
        self.scan_accepts.contains(&kind)
    }
}

/// A nullable wrapper type for SQL `NULL` round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullWrapper {
    pub name: String,
    pub backing: WireKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentPolicy {
    /// Doc comments on generated symbols.
    pub doc_comments: bool,
    /// Ordinal comments on the value table.
    pub ordinal_comments: bool,
}

/// Everything the renderer needs for one enum type.
///
/// Built by [`plan`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    type_name: String,
    repr: EnumRepr,
    resolved: EnumConfig,
    values: Vec<PlannedValue>,
    artifacts: ArtifactSet,
    parse: Option<ParseRule>,
    sql: Option<SqlRule>,
    null_wrappers: Vec<NullWrapper>,
    comments: CommentPolicy,
}

impl GenerationPlan {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub const fn repr(&self) -> EnumRepr {
        self.repr
    }

    pub const fn resolved(&self) -> &EnumConfig {
        &self.resolved
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[PlannedValue] {
        &self.values
    }

    pub const fn artifacts(&self) -> ArtifactSet {
        self.artifacts
    }

    pub fn has(&self, kind: ArtifactKind) -> bool {
        self.artifacts.has(kind)
    }

    pub const fn parse_rule(&self) -> Option<&ParseRule> {
        self.parse.as_ref()
    }

    pub const fn sql_rule(&self) -> Option<&SqlRule> {
        self.sql.as_ref()
    }

    pub fn null_wrappers(&self) -> &[NullWrapper] {
        &self.null_wrappers
    }

    pub const fn comments(&self) -> CommentPolicy {
        self.comments
    }

    /// Generated identifier for `literal`.
    pub fn identifier(&self, literal: &str) -> Option<&str> {
        self.values.iter().find(|value| value.literal == literal).map(|value| value.identifier.as_str())
    }

    /// `(literal, identifier)` pairs in declaration order.
    pub fn value_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|value| (value.literal.as_str(), value.identifier.as_str()))
    }
}

/// Plans the artifacts for `spec` under the already resolved configuration.
///
/// Fails on a broken value list, on identifier collisions, and on option combinations that
/// cannot be generated. Every other combination is honored.
pub fn plan(spec: &EnumSpec, resolved: EnumConfig) -> Result<GenerationPlan, PlanError> {
    validate_values(&spec.values)?;
    check_conflicts(spec, &resolved)?;

    let values = name_values(spec, &resolved)?;
    let artifacts = select_artifacts(&resolved);

    let parse = artifacts.has(ArtifactKind::Parse).then(|| {
        let case_insensitive = resolved.enabled(BoolOption::CaseInsensitive);
        ParseRule {
            type_name: spec.type_name.clone(),
            lowercase_lookup: case_insensitive || resolved.enabled(BoolOption::LowercaseLookup),
            case_insensitive,
        }
    });

    let sql = artifacts.has(ArtifactKind::SqlValue).then(|| {
        let value_kind = if resolved.enabled(BoolOption::SqlInt) && spec.repr.has_ordinal() {
            WireKind::Ordinal
        } else {
            WireKind::String
        };
        let scan_accepts = if spec.repr.has_ordinal() {
            vec![WireKind::String, WireKind::Ordinal]
        } else {
            vec![WireKind::String]
        };
        SqlRule { value_kind, scan_accepts }
    });

    let null_wrappers = null_wrappers(&spec.type_name, &resolved);

    let no_comments = resolved.enabled(BoolOption::NoComments);
    let comments = CommentPolicy {
        doc_comments: !no_comments,
        ordinal_comments: !no_comments && !resolved.enabled(BoolOption::NoIota),
    };

    debug!(
        type_name = %spec.type_name,
        repr = %spec.repr,
        values = values.len(),
        artifacts = ?artifacts.kinds().map(<&str>::from).collect::<Vec<_>>(),
        "Planned enum type"
    );

    Ok(GenerationPlan {
        type_name: spec.type_name.clone(),
        repr: spec.repr,
        resolved,
        values,
        artifacts,
        parse,
        sql,
        null_wrappers,
        comments,
    })
}

fn validate_values(values: &[String]) -> Result<(), PlanError> {
    if values.is_empty() {
        return Err(PlanError::InvalidValues { reason: "no values declared".into() });
    }

    let mut seen = FxHashSet::default();
    for literal in values {
        if literal.trim().is_empty() {
            return Err(PlanError::InvalidValues { reason: "blank literal in value list".into() });
        }
        if !seen.insert(literal.as_str()) {
            return Err(PlanError::InvalidValues {
                reason: format!("`{literal}` is declared more than once").into(),
            });
        }
    }
    Ok(())
}

fn check_conflicts(spec: &EnumSpec, config: &EnumConfig) -> Result<(), PlanError> {
    let conflict = |reason: String| -> Result<(), PlanError> {
        Err(PlanError::ArtifactConflict { reason: Cow::Owned(reason) })
    };

    if config.enabled(BoolOption::NoParse) {
        let needs_parse: Vec<String> = NEEDS_PARSE
            .iter()
            .filter(|&&option| config.enabled(option))
            .map(|option| format!("`@{}`", option.key()))
            .collect();
        if !needs_parse.is_empty() {
            return conflict(format!(
                "`@noparse` suppresses the parse step required by {}",
                needs_parse.join(", ")
            ));
        }
    }

    if !spec.repr.has_ordinal() {
        let sql_pair = [BoolOption::Sql, BoolOption::SqlNullInt, BoolOption::SqlNullStr]
            .into_iter()
            .any(|option| config.enabled(option));
        if sql_pair && config.enabled(BoolOption::SqlInt) {
            return conflict(format!(
                "`@sqlint` needs an ordinal, but `{}` is string-backed",
                spec.type_name
            ));
        }
        if config.enabled(BoolOption::SqlNullInt) {
            return conflict(format!(
                "`@sqlnullint` needs an ordinal, but `{}` is string-backed",
                spec.type_name
            ));
        }
    }

    let folds = config.enabled(BoolOption::LowercaseLookup)
        || config.enabled(BoolOption::CaseInsensitive);
    if folds {
        let mut folded: FxHashMap<String, &str> = FxHashMap::default();
        for literal in &spec.values {
            if let Some(first) = folded.insert(literal.to_lowercase(), literal) {
                return conflict(format!(
                    "`{first}` and `{literal}` are the same value under case-folded lookup"
                ));
            }
        }
    }

    Ok(())
}

fn name_values(spec: &EnumSpec, config: &EnumConfig) -> Result<Vec<PlannedValue>, PlanError> {
    let mut owners: FxHashMap<String, &str> = FxHashMap::default();
    let mut values = Vec::with_capacity(spec.values.len());

    for (ordinal, literal) in spec.values.iter().enumerate() {
        let identifier = derive_identifier(&spec.type_name, literal, config)?;
        if let Some(first) = owners.insert(identifier.clone(), literal) {
            return Err(PlanError::IdentifierCollision {
                identifier,
                first: first.to_owned(),
                second: literal.clone(),
            });
        }
        values.push(PlannedValue { literal: literal.clone(), identifier, ordinal });
    }

    Ok(values)
}

fn select_artifacts(config: &EnumConfig) -> ArtifactSet {
    let on = |option| config.enabled(option);
    let mut artifacts = ArtifactSet::STRINGIFY;

    if !on(BoolOption::NoParse) {
        artifacts |= ArtifactSet::PARSE | ArtifactSet::IS_VALID;
    }
    if on(BoolOption::MustParse) {
        artifacts |= ArtifactSet::MUST_PARSE;
    }
    if on(BoolOption::Marshal) {
        artifacts |= ArtifactSet::MARSHAL;
    }
    // The nullable wrappers delegate to the plain Scan/Value pair.
    if on(BoolOption::Sql) || on(BoolOption::SqlNullInt) || on(BoolOption::SqlNullStr) {
        artifacts |= ArtifactSet::SQL;
    }
    if on(BoolOption::SqlNullInt) {
        artifacts |= ArtifactSet::SQL_NULL_INT;
    }
    if on(BoolOption::SqlNullStr) {
        artifacts |= ArtifactSet::SQL_NULL_STR;
    }
    if on(BoolOption::Flag) {
        artifacts |= ArtifactSet::FLAG;
    }
    if on(BoolOption::Names) {
        artifacts |= ArtifactSet::NAMES;
    }
    if on(BoolOption::Values) {
        artifacts |= ArtifactSet::VALUES;
    }
    if on(BoolOption::Ptr) {
        artifacts |= ArtifactSet::PTR;
    }

    artifacts
}

fn null_wrappers(type_name: &str, config: &EnumConfig) -> Vec<NullWrapper> {
    let null_int = config.enabled(BoolOption::SqlNullInt);
    let mut wrappers = Vec::new();

    if null_int {
        wrappers.push(NullWrapper { name: format!("Null{type_name}"), backing: WireKind::Ordinal });
    }
    if config.enabled(BoolOption::SqlNullStr) {
        let name =
            if null_int { format!("Null{type_name}Str") } else { format!("Null{type_name}") };
        wrappers.push(NullWrapper { name, backing: WireKind::String });
    }

    wrappers
}
