use serde::{Deserialize, Serialize};

/// Rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Identifier-like column without any index entry.
    MissingIndex,
    /// TEXT-family column where a VARCHAR would do.
    UnnecessaryText,
    /// Nullable column without a default; suggests NOT NULL.
    NullableWithoutDefault,
    /// Nullable column without a default; suggests a default value.
    MissingDefaultValue,
    /// Table without a `PRIMARY` index.
    MissingPrimaryKey,
}

impl FindingKind {
    /// Stable code used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingIndex => "missing_index",
            Self::UnnecessaryText => "unnecessary_text",
            Self::NullableWithoutDefault => "nullable_without_default",
            Self::MissingDefaultValue => "missing_default_value",
            Self::MissingPrimaryKey => "missing_primary_key",
        }
    }
}

/// A single improvement suggestion with the SQL that applies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub table_name: String,
    /// Column the finding was derived from; `None` for table-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub issue: String,
    pub suggestion: String,
    pub remediation_sql: String,
}
