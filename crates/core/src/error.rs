use crate::config::{BoolOption, StringOption};
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Which option-setting path rejected a directive key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OptionForm {
    /// `@key` or `@key:true|false`.
    Boolean,
    /// `@key:"value"` or `@key="value"`.
    String,
}

/// Errors raised while reading a single directive.
///
/// Both variants fail the directive as a whole; nothing is applied to the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    /// The directive text is structurally invalid (no leading `@`, or no key).
    #[error(
        "Malformed directive `{directive}`: expected `@key`, `@key:true|false`, `@key:\"value\"` or `@key=\"value\"`"
    )]
    MalformedDirective { directive: String },

    /// The key is not a known option for the form it was written in.
    #[error("Unknown {form} directive `@{key}`: expected one of {}", known_keys(*form))]
    UnknownDirective { key: String, form: OptionForm },
}

/// Errors raised by the planner for one enum type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The value list breaks the caller contract (empty, blank or repeated literals).
    #[error("Invalid value list: {reason}")]
    InvalidValues { reason: Cow<'static, str> },

    /// Two literals derive the same generated identifier.
    #[error("Identifier collision: `{first}` and `{second}` both generate `{identifier}`")]
    IdentifierCollision { identifier: String, first: String, second: String },

    /// The requested artifact combination cannot be generated.
    #[error("Artifact conflict: {reason}")]
    ArtifactConflict { reason: Cow<'static, str> },
}

/// Failure to generate one enum type; carries the type name so a batch run can report it
/// and move on to the next type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to read directives for `{type_name}`: {source}")]
    Annotation { type_name: String, source: AnnotationError },

    #[error("Failed to plan `{type_name}`: {source}")]
    Plan { type_name: String, source: PlanError },
}

impl GenerateError {
    /// Name of the enum type whose generation was aborted.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Annotation { type_name, .. } | Self::Plan { type_name, .. } => type_name,
        }
    }
}

/// Input rejected by a planned parse (or scan / unmarshal) artifact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input} is not a valid {type_name}")]
pub struct InvalidValue {
    pub input: String,
    pub type_name: String,
}

fn known_keys(form: OptionForm) -> String {
    let keys: Vec<&'static str> = match form {
        OptionForm::Boolean => BoolOption::iter().map(BoolOption::key).collect(),
        OptionForm::String => StringOption::iter().map(StringOption::key).collect(),
    };
    keys.iter().map(|key| format!("@{key}")).collect::<Vec<_>>().join(", ")
}
