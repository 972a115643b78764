//! Generated constant names.

use crate::config::{BoolOption, EnumConfig};
use crate::error::PlanError;

/// Derives the generated identifier for `literal`.
///
/// The literal-derived part is camel-cased unless `nocamel`, then forced to lower or upper
/// case if requested. It is preceded by the type name unless `noprefix`, and a non-empty custom
/// prefix always goes in front:
///
/// | config | `pending` in `AnnotationStatus` |
/// |---|---|
/// | `{}` | `AnnotationStatusPending` |
/// | `{prefix = "My"}` | `MyAnnotationStatusPending` |
/// | `{noprefix}` | `Pending` |
/// | `{noprefix, prefix = "My"}` | `MyPending` |
pub fn derive_identifier(
    type_name: &str,
    literal: &str,
    config: &EnumConfig,
) -> Result<String, PlanError> {
    let force_lower = config.enabled(BoolOption::ForceLower);
    let force_upper = config.enabled(BoolOption::ForceUpper);
    if force_lower && force_upper {
        return Err(PlanError::ArtifactConflict {
            reason: "`forcelower` and `forceupper` cannot both be enabled".into(),
        });
    }

    let mut suffix = if config.enabled(BoolOption::LeaveSnakeCase) {
        literal.to_owned()
    } else {
        camel_case(literal)
    };
    if force_lower {
        suffix = suffix.to_lowercase();
    } else if force_upper {
        suffix = suffix.to_uppercase();
    }

    let mut identifier = config.custom_prefix().to_owned();
    if !config.enabled(BoolOption::NoPrefix) {
        identifier.push_str(type_name);
    }

    if identifier.is_empty() {
        if suffix.is_empty() {
            return Err(PlanError::InvalidValues {
                reason: format!("`{literal}` does not produce an identifier").into(),
            });
        }
        // Identifiers cannot start with a digit.
        if suffix.starts_with(|c: char| c.is_ascii_digit()) {
            identifier.push('_');
        }
    }

    identifier.push_str(&suffix);
    Ok(identifier)
}

/// `annotation_red` -> `AnnotationRed`. Only the first character of each `_`-separated word
/// changes; empty words are dropped.
pub fn camel_case(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for word in literal.split('_').filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
