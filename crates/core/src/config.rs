//! Per-type configuration record.
//!
//! Every option lives in a [`ConfigSlot`], which keeps "never set" apart from "explicitly set to
//! the default value". That distinction is what lets a per-type `@marshal:false` override a
//! global `marshal = true` while an absent directive falls through to it.

use crate::annotation::{Directive, DirectiveValue};
use crate::error::{AnnotationError, OptionForm};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::trace;

/// A configuration value together with its presence flag.
///
/// Serializes as the bare value when set and as `null` when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigSlot<T> {
    value: Option<T>,
}

impl<T> Default for ConfigSlot<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> ConfigSlot<T> {
    #[must_use]
    pub const fn unset() -> Self {
        Self { value: None }
    }

    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The stored value, or `None` when the slot was never set.
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Stores `value` and marks the slot as set, replacing any earlier value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Returns `self` when set, otherwise `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        if self.is_set() { self } else { fallback }
    }
}

impl<T: Clone> ConfigSlot<T> {
    /// Reads the slot, falling back to the caller-supplied default when unset.
    pub fn get_or(&self, default: T) -> T {
        self.value.clone().unwrap_or(default)
    }
}

/// Boolean options, keyed by the directive spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum BoolOption {
    #[strum(serialize = "noprefix")]
    NoPrefix,
    #[strum(serialize = "noiota")]
    NoIota,
    #[strum(serialize = "lower")]
    LowercaseLookup,
    #[strum(serialize = "nocase")]
    CaseInsensitive,
    #[strum(serialize = "marshal")]
    Marshal,
    #[strum(serialize = "sql")]
    Sql,
    #[strum(serialize = "sqlint")]
    SqlInt,
    #[strum(serialize = "flag")]
    Flag,
    #[strum(serialize = "names")]
    Names,
    #[strum(serialize = "values")]
    Values,
    #[strum(serialize = "nocamel")]
    LeaveSnakeCase,
    #[strum(serialize = "ptr")]
    Ptr,
    #[strum(serialize = "sqlnullint")]
    SqlNullInt,
    #[strum(serialize = "sqlnullstr")]
    SqlNullStr,
    #[strum(serialize = "mustparse")]
    MustParse,
    #[strum(serialize = "forcelower")]
    ForceLower,
    #[strum(serialize = "forceupper")]
    ForceUpper,
    #[strum(serialize = "nocomments")]
    NoComments,
    #[strum(serialize = "noparse")]
    NoParse,
}

impl BoolOption {
    /// Directive key, without the `@` marker.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// String options, keyed by the directive spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum StringOption {
    #[strum(serialize = "prefix")]
    Prefix,
}

impl StringOption {
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Options for one enum type (or the global defaults every type starts from).
///
/// Deserializes from field names or directive keys (`no_prefix` or `noprefix`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumConfig {
    #[serde(alias = "noprefix")]
    pub no_prefix: ConfigSlot<bool>,
    #[serde(alias = "noiota")]
    pub no_iota: ConfigSlot<bool>,
    #[serde(alias = "lower")]
    pub lowercase_lookup: ConfigSlot<bool>,
    #[serde(alias = "nocase")]
    pub case_insensitive: ConfigSlot<bool>,
    pub marshal: ConfigSlot<bool>,
    pub sql: ConfigSlot<bool>,
    #[serde(alias = "sqlint")]
    pub sql_int: ConfigSlot<bool>,
    pub flag: ConfigSlot<bool>,
    pub names: ConfigSlot<bool>,
    pub values: ConfigSlot<bool>,
    #[serde(alias = "nocamel")]
    pub leave_snake_case: ConfigSlot<bool>,
    pub ptr: ConfigSlot<bool>,
    #[serde(alias = "sqlnullint")]
    pub sql_null_int: ConfigSlot<bool>,
    #[serde(alias = "sqlnullstr")]
    pub sql_null_str: ConfigSlot<bool>,
    #[serde(alias = "mustparse")]
    pub must_parse: ConfigSlot<bool>,
    #[serde(alias = "forcelower")]
    pub force_lower: ConfigSlot<bool>,
    #[serde(alias = "forceupper")]
    pub force_upper: ConfigSlot<bool>,
    #[serde(alias = "nocomments")]
    pub no_comments: ConfigSlot<bool>,
    #[serde(alias = "noparse")]
    pub no_parse: ConfigSlot<bool>,

    pub prefix: ConfigSlot<String>,
}

impl EnumConfig {
    /// Builds a configuration by applying `annotations` in order.
    ///
    /// Fails on the first bad directive; directives before it are discarded with the
    /// partially built configuration.
    pub fn from_annotations<I, S>(annotations: I) -> Result<Self, AnnotationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for raw in annotations {
            crate::annotation::parse_annotation(raw.as_ref(), &mut config)?;
        }
        Ok(config)
    }

    pub const fn bool_slot(&self, option: BoolOption) -> &ConfigSlot<bool> {
        match option {
            BoolOption::NoPrefix => &self.no_prefix,
            BoolOption::NoIota => &self.no_iota,
            BoolOption::LowercaseLookup => &self.lowercase_lookup,
            BoolOption::CaseInsensitive => &self.case_insensitive,
            BoolOption::Marshal => &self.marshal,
            BoolOption::Sql => &self.sql,
            BoolOption::SqlInt => &self.sql_int,
            BoolOption::Flag => &self.flag,
            BoolOption::Names => &self.names,
            BoolOption::Values => &self.values,
            BoolOption::LeaveSnakeCase => &self.leave_snake_case,
            BoolOption::Ptr => &self.ptr,
            BoolOption::SqlNullInt => &self.sql_null_int,
            BoolOption::SqlNullStr => &self.sql_null_str,
            BoolOption::MustParse => &self.must_parse,
            BoolOption::ForceLower => &self.force_lower,
            BoolOption::ForceUpper => &self.force_upper,
            BoolOption::NoComments => &self.no_comments,
            BoolOption::NoParse => &self.no_parse,
        }
    }

    pub const fn bool_slot_mut(&mut self, option: BoolOption) -> &mut ConfigSlot<bool> {
        match option {
            BoolOption::NoPrefix => &mut self.no_prefix,
            BoolOption::NoIota => &mut self.no_iota,
            BoolOption::LowercaseLookup => &mut self.lowercase_lookup,
            BoolOption::CaseInsensitive => &mut self.case_insensitive,
            BoolOption::Marshal => &mut self.marshal,
            BoolOption::Sql => &mut self.sql,
            BoolOption::SqlInt => &mut self.sql_int,
            BoolOption::Flag => &mut self.flag,
            BoolOption::Names => &mut self.names,
            BoolOption::Values => &mut self.values,
            BoolOption::LeaveSnakeCase => &mut self.leave_snake_case,
            BoolOption::Ptr => &mut self.ptr,
            BoolOption::SqlNullInt => &mut self.sql_null_int,
            BoolOption::SqlNullStr => &mut self.sql_null_str,
            BoolOption::MustParse => &mut self.must_parse,
            BoolOption::ForceLower => &mut self.force_lower,
            BoolOption::ForceUpper => &mut self.force_upper,
            BoolOption::NoComments => &mut self.no_comments,
            BoolOption::NoParse => &mut self.no_parse,
        }
    }

    pub const fn string_slot(&self, option: StringOption) -> &ConfigSlot<String> {
        match option {
            StringOption::Prefix => &self.prefix,
        }
    }

    pub const fn string_slot_mut(&mut self, option: StringOption) -> &mut ConfigSlot<String> {
        match option {
            StringOption::Prefix => &mut self.prefix,
        }
    }

    /// Reads a boolean option with the built-in default (`false`) for unset slots.
    pub fn enabled(&self, option: BoolOption) -> bool {
        self.bool_slot(option).get_or(false)
    }

    /// The custom prefix, or `""` when unset.
    pub fn custom_prefix(&self) -> &str {
        self.prefix.get().map_or("", String::as_str)
    }

    /// Number of slots that carry a value.
    pub fn set_count(&self) -> usize {
        let bools = BoolOption::iter().filter(|&option| self.bool_slot(option).is_set()).count();
        let strings = StringOption::iter().filter(|&option| self.string_slot(option).is_set()).count();
        bools + strings
    }

    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }

    /// Applies a parsed directive.
    pub fn apply(&mut self, directive: &Directive) -> Result<(), AnnotationError> {
        match &directive.value {
            DirectiveValue::Flag => self.set_bool(&directive.key, true),
            DirectiveValue::Bool(value) => self.set_bool(&directive.key, *value),
            DirectiveValue::Text(value) => self.set_string(&directive.key, value),
        }
    }

    /// Sets a boolean option by directive key.
    ///
    /// Enabling `nocase` also enables `lower`; disabling it leaves `lower` alone.
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), AnnotationError> {
        let option = key.parse::<BoolOption>().map_err(|_| AnnotationError::UnknownDirective {
            key: key.to_owned(),
            form: OptionForm::Boolean,
        })?;

        self.bool_slot_mut(option).set(value);
        if option == BoolOption::CaseInsensitive && value {
            self.lowercase_lookup.set(true);
        }

        trace!(key, value, "Applied boolean directive");
        Ok(())
    }

    /// Sets a string option by directive key.
    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), AnnotationError> {
        let option = key.parse::<StringOption>().map_err(|_| AnnotationError::UnknownDirective {
            key: key.to_owned(),
            form: OptionForm::String,
        })?;

        self.string_slot_mut(option).set(value.to_owned());

        trace!(key, value, "Applied string directive");
        Ok(())
    }
}
