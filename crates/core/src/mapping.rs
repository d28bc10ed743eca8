//! Versioned mapping table from draft JSON keys to master record fields.
//!
//! The table is the single source of truth for which keys the extractor
//! understands. Keys outside the table are reported by the extractor
//! instead of being silently dropped.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Master fields
// ---------------------------------------------------------------------------

/// The fixed set of scalar columns on a master record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterField {
    Name,
    Email,
    Phone,
    Address,
    Qualification,
    Experience,
    Skills,
    ProjectDetails,
}

impl MasterField {
    /// Column name in the `master_records` table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Qualification => "qualification",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::ProjectDetails => "project_details",
        }
    }
}

/// Declared scalar type of a master field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    /// Human-readable name used in transform error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "an integer",
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping table
// ---------------------------------------------------------------------------

/// One row of the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    /// Key looked up in the draft JSON object.
    pub json_key: &'static str,
    /// Master record column the value lands in.
    pub field: MasterField,
    /// Type the JSON value is coerced to.
    pub kind: FieldKind,
}

/// Version of [`MAPPING_V1`]. Stored on every master record so rows can be
/// traced back to the table that produced them.
pub const MAPPING_VERSION: i32 = 1;

/// Mapping table, version 1.
pub const MAPPING_V1: &[FieldMapping] = &[
    FieldMapping {
        json_key: "name",
        field: MasterField::Name,
        kind: FieldKind::Text,
    },
    FieldMapping {
        json_key: "email",
        field: MasterField::Email,
        kind: FieldKind::Text,
    },
    FieldMapping {
        json_key: "phone",
        field: MasterField::Phone,
        kind: FieldKind::Text,
    },
    FieldMapping {
        json_key: "address",
        field: MasterField::Address,
        kind: FieldKind::Text,
    },
    FieldMapping {
        json_key: "qualification",
        field: MasterField::Qualification,
        kind: FieldKind::Text,
    },
    FieldMapping {
        json_key: "experience",
        field: MasterField::Experience,
        kind: FieldKind::Integer,
    },
    FieldMapping {
        json_key: "skills",
        field: MasterField::Skills,
        kind: FieldKind::Text,
    },
    FieldMapping {
        json_key: "projectDetails",
        field: MasterField::ProjectDetails,
        kind: FieldKind::Text,
    },
];

/// The mapping table currently used for extraction.
pub fn current_mappings() -> &'static [FieldMapping] {
    MAPPING_V1
}

/// Look up the mapping for a JSON key in the current table.
pub fn find_mapping(json_key: &str) -> Option<&'static FieldMapping> {
    current_mappings().iter().find(|m| m.json_key == json_key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
