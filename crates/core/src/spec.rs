use serde::{Deserialize, Serialize};

/// Underlying representation of the declared enum type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnumRepr {
    /// Values are the literal names themselves.
    String,
    /// Values are ordinals `0..n`.
    #[default]
    Integer,
}

impl EnumRepr {
    pub const fn has_ordinal(self) -> bool {
        matches!(self, Self::Integer)
    }
}

/// One enum declaration as handed over by the source scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSpec {
    pub type_name: String,
    #[serde(default)]
    pub repr: EnumRepr,
    /// Literal names in declaration order.
    pub values: Vec<String>,
    /// Directive strings, one per entry, in the order they appeared.
    #[serde(default)]
    pub raw_annotations: Vec<String>,
}

impl EnumSpec {
    pub fn new<V, S>(type_name: impl Into<String>, repr: EnumRepr, values: V) -> Self
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            repr,
            values: values.into_iter().map(Into::into).collect(),
            raw_annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotations<A, S>(mut self, annotations: A) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_annotations.extend(annotations.into_iter().map(Into::into));
        self
    }
}
