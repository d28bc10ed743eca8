//! Field extraction from draft JSON documents.
//!
//! Turns one or more schema-less draft documents into an [`ExtractedFields`]
//! record using the table in [`crate::mapping`]. Extraction is forgiving:
//! absent keys leave the field unset and unknown keys are only reported.
//! The one hard failure is a value that cannot be coerced to its field's
//! declared type.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::mapping::{self, FieldKind, FieldMapping, MasterField};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Structured, all-optional record produced by extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i32>,
    pub skills: Option<String>,
    pub project_details: Option<String>,
}

impl ExtractedFields {
    fn set_text(&mut self, field: MasterField, value: Option<String>) {
        let slot = match field {
            MasterField::Name => &mut self.name,
            MasterField::Email => &mut self.email,
            MasterField::Phone => &mut self.phone,
            MasterField::Address => &mut self.address,
            MasterField::Qualification => &mut self.qualification,
            MasterField::Skills => &mut self.skills,
            MasterField::ProjectDetails => &mut self.project_details,
            // Integer fields never reach here; the mapping table pins the kind.
            MasterField::Experience => return,
        };
        *slot = value;
    }

    fn set_integer(&mut self, field: MasterField, value: Option<i32>) {
        if field == MasterField::Experience {
            self.experience = value;
        }
    }

    /// Coerce `value` according to `mapping` and overwrite the target field.
    fn apply(&mut self, mapping: &FieldMapping, value: &Value) -> Result<(), CoreError> {
        match mapping.kind {
            FieldKind::Text => {
                let text = coerce_text(mapping, value)?;
                self.set_text(mapping.field, text);
            }
            FieldKind::Integer => {
                let int = coerce_integer(mapping, value)?;
                self.set_integer(mapping.field, int);
            }
        }
        Ok(())
    }
}

/// Diagnostics gathered while extracting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Version of the mapping table that was applied.
    pub mapping_version: i32,
    /// Number of documents folded into the result.
    pub drafts_merged: usize,
    /// Top-level keys that had no entry in the mapping table (sorted).
    pub unmapped_keys: BTreeSet<String>,
    /// Documents that were not JSON objects and contributed nothing.
    pub non_object_documents: usize,
}

impl ExtractionReport {
    fn new() -> Self {
        Self {
            mapping_version: mapping::MAPPING_VERSION,
            drafts_merged: 0,
            unmapped_keys: BTreeSet::new(),
            non_object_documents: 0,
        }
    }

    /// Whether any input key was not understood by the mapping table.
    pub fn has_unmapped_keys(&self) -> bool {
        !self.unmapped_keys.is_empty()
    }
}

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub fields: ExtractedFields,
    pub report: ExtractionReport,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract fields from a single document.
pub fn extract(document: &Value) -> Result<Extraction, CoreError> {
    extract_merged(std::iter::once(document))
}

/// Extract fields from several documents, folding them in iteration order.
///
/// For each mapped key present in a document the accumulated value is
/// overwritten, so the last document carrying a key wins. A JSON `null`
/// counts as present and clears the field.
pub fn extract_merged<'a, I>(documents: I) -> Result<Extraction, CoreError>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut fields = ExtractedFields::default();
    let mut report = ExtractionReport::new();

    for document in documents {
        report.drafts_merged += 1;

        let Some(obj) = document.as_object() else {
            report.non_object_documents += 1;
            continue;
        };

        for (key, value) in obj {
            match mapping::find_mapping(key) {
                Some(m) => fields.apply(m, value)?,
                None => {
                    report.unmapped_keys.insert(key.clone());
                }
            }
        }
    }

    Ok(Extraction { fields, report })
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

fn coerce_text(mapping: &FieldMapping, value: &Value) -> Result<Option<String>, CoreError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(transform_error(mapping, value)),
    }
}

fn coerce_integer(mapping: &FieldMapping, value: &Value) -> Result<Option<i32>, CoreError> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|v| i32::try_from(v).ok())
        .map(Some)
        .ok_or_else(|| transform_error(mapping, value))
}

fn transform_error(mapping: &FieldMapping, value: &Value) -> CoreError {
    let found = match value {
        Value::String(s) => format!("string \"{s}\""),
        Value::Number(n) => format!("number {n}"),
        other => json_type_name(other).to_string(),
    };
    CoreError::Transform {
        field: mapping.json_key,
        expected: mapping.kind.label(),
        found,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
