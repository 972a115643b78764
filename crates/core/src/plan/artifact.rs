use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// One generated capability attached to an enum type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ArtifactKind {
    Stringify,
    Parse,
    IsValid,
    MustParse,
    MarshalText,
    UnmarshalText,
    AppendText,
    SqlScan,
    SqlValue,
    SqlNullInt,
    SqlNullStr,
    Flag,
    Names,
    Values,
    Ptr,
}

bitflags! {
    /// Set of artifacts the renderer must emit for one type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ArtifactSet: u32 {
        const STRINGIFY = 1 << 0;
        const PARSE = 1 << 1;
        const IS_VALID = 1 << 2;
        const MUST_PARSE = 1 << 3;
        const MARSHAL_TEXT = 1 << 4;
        const UNMARSHAL_TEXT = 1 << 5;
        const APPEND_TEXT = 1 << 6;
        const SQL_SCAN = 1 << 7;
        const SQL_VALUE = 1 << 8;
        const SQL_NULL_INT = 1 << 9;
        const SQL_NULL_STR = 1 << 10;
        const FLAG = 1 << 11;
        const NAMES = 1 << 12;
        const VALUES = 1 << 13;
        const PTR = 1 << 14;

        const MARSHAL = Self::MARSHAL_TEXT.bits() | Self::UNMARSHAL_TEXT.bits() | Self::APPEND_TEXT.bits();
        const SQL = Self::SQL_SCAN.bits() | Self::SQL_VALUE.bits();
    }
}

impl From<ArtifactKind> for ArtifactSet {
    fn from(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Stringify => Self::STRINGIFY,
            ArtifactKind::Parse => Self::PARSE,
            ArtifactKind::IsValid => Self::IS_VALID,
            ArtifactKind::MustParse => Self::MUST_PARSE,
            ArtifactKind::MarshalText => Self::MARSHAL_TEXT,
            ArtifactKind::UnmarshalText => Self::UNMARSHAL_TEXT,
            ArtifactKind::AppendText => Self::APPEND_TEXT,
            ArtifactKind::SqlScan => Self::SQL_SCAN,
            ArtifactKind::SqlValue => Self::SQL_VALUE,
            ArtifactKind::SqlNullInt => Self::SQL_NULL_INT,
            ArtifactKind::SqlNullStr => Self::SQL_NULL_STR,
            ArtifactKind::Flag => Self::FLAG,
            ArtifactKind::Names => Self::NAMES,
            ArtifactKind::Values => Self::VALUES,
            ArtifactKind::Ptr => Self::PTR,
        }
    }
}

impl FromIterator<ArtifactKind> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = ArtifactKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, kind| set | kind.into())
    }
}

impl ArtifactSet {
    pub fn has(self, kind: ArtifactKind) -> bool {
        self.contains(kind.into())
    }

    /// Kinds in the set, in declaration order of [`ArtifactKind`].
    pub fn kinds(self) -> impl Iterator<Item = ArtifactKind> {
        ArtifactKind::iter().filter(move |&kind| self.has(kind))
    }
}

impl Serialize for ArtifactSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.kinds())
    }
}

impl<'de> Deserialize<'de> for ArtifactSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kinds = Vec::<ArtifactKind>::deserialize(deserializer)?;
        Ok(kinds.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_its_own_bit() {
        let all: ArtifactSet = ArtifactKind::iter().collect();
        assert_eq!(all.bits().count_ones() as usize, ArtifactKind::iter().count());
    }

    #[test]
    fn serializes_as_kind_names() {
        let set = ArtifactSet::STRINGIFY | ArtifactSet::SQL;
        let json = serde_json::to_value(set).unwrap();
        assert_eq!(json, serde_json::json!(["stringify", "sql_scan", "sql_value"]));

        let back: ArtifactSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(ArtifactKind::SqlNullInt.to_string(), "sql_null_int");
        assert_eq!(<&str>::from(ArtifactKind::IsValid), "is_valid");
    }
}
