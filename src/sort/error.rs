use thiserror::Error;

/// Errors raised by the column sorter.
///
/// Column errors are contract violations of the input: the sort is abandoned
/// and the records are left exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Column '{column}': record {index} has no field '{segment}'")]
    MissingColumn {
        column: String,
        segment: String,
        index: usize,
    },

    #[error("Column '{column}': record {index} ends on a nested record, not a value")]
    NotComparable { column: String, index: usize },

    #[error("Invalid sort directive '{0}': {1}")]
    InvalidDirective(String, String),
}
