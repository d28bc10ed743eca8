#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A JSON value was present for a mapped field but could not be coerced
    /// to the field's declared type.
    #[error("Field '{field}' expects {expected} but found {found}")]
    Transform {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
