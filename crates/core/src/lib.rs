//! # Enum generation core
//!
//! Decides what companion code an annotated enum gets. Input is one declaration's value list
//! plus its `@` directives; output is a [`GenerationPlan`] the rendering backend turns into
//! text. Nothing here performs I/O, and every type is planned independently, so a batch can be
//! fanned out across threads with a shared, read-only set of global defaults.
//!
//! ## Pipeline
//!
//! 1. **[`annotation`]**: one directive string into a [`Directive`] and onto an [`EnumConfig`].
//! 2. **[`resolve`]**: per-type configuration over the global defaults, slot by slot.
//! 3. **[`naming`]**: generated identifier per literal.
//! 4. **[`plan`]**: artifact set and artifact parameters.
//!
//! [`generate`] runs all of them for one [`EnumSpec`].
//!
//! ## Example
//!
//! ```rust
//! use enumgen_core::{ArtifactKind, EnumConfig, EnumRepr, EnumSpec, generate};
//!
//! let spec = EnumSpec::new("AnnotationStatus", EnumRepr::String, ["pending", "running"])
//!     .with_annotations(["@marshal:true", "@sql:false", "@prefix:\"My\""]);
//!
//! let plan = generate(&spec, &EnumConfig::default()).unwrap();
//!
//! assert_eq!(plan.identifier("pending"), Some("MyAnnotationStatusPending"));
//! assert!(plan.has(ArtifactKind::MarshalText));
//! assert!(!plan.has(ArtifactKind::SqlScan));
//! assert_eq!(plan.parse("bogus").unwrap_err().to_string(), "bogus is not a valid AnnotationStatus");
//! ```

pub mod annotation;
pub mod config;
mod error;
pub mod naming;
pub mod plan;
pub mod resolve;
pub mod scan;
mod spec;

pub use crate::annotation::{Directive, DirectiveValue, parse_annotation};
pub use crate::config::{BoolOption, ConfigSlot, EnumConfig, StringOption};
pub use crate::error::{AnnotationError, GenerateError, InvalidValue, OptionForm, PlanError};
pub use crate::naming::derive_identifier;
pub use crate::plan::{
    ArtifactKind, ArtifactSet, CommentPolicy, GenerationPlan, NullWrapper, ParseRule, PlannedValue,
    SqlInput, SqlOutput, SqlRule, WireKind, plan,
};
pub use crate::resolve::resolve;
pub use crate::scan::split_directives;
pub use crate::spec::{EnumRepr, EnumSpec};

use tracing::debug;

/// Parses `spec.raw_annotations`, resolves them over `global` and plans the type.
///
/// Errors carry the type name; a failing type does not affect any other.
pub fn generate(spec: &EnumSpec, global: &EnumConfig) -> Result<GenerationPlan, GenerateError> {
    let local = EnumConfig::from_annotations(&spec.raw_annotations).map_err(|source| {
        GenerateError::Annotation { type_name: spec.type_name.clone(), source }
    })?;
    debug!(type_name = %spec.type_name, directives = spec.raw_annotations.len(), "Parsed directives");

    let resolved = resolve(global, &local);

    plan(spec, resolved)
        .map_err(|source| GenerateError::Plan { type_name: spec.type_name.clone(), source })
}
