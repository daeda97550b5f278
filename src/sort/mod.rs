//! Multi-key column sorting for sequences of records.
//!
//! A [`SortSpec`] lists column keys in priority order, each with a
//! [`SortDirective`]. [`sort_by_columns`] extracts one value per record for
//! every column (dotted keys reach into nested records), computes a single
//! stable ordering over all columns, and reorders the records in place.
//!
//! `sort_by_columns` takes `&mut [R]`, so callers sharing a sequence across
//! threads must hold a lock (or work on a copy) for the duration of the call.

pub mod compare;
pub mod directive;
pub mod error;
pub mod record;
pub mod sorter;

pub use compare::SortKey;
pub use directive::{parse_column, CompareMode, SortDirective, SortOrder, SortSpec};
pub use error::SortError;
pub use record::{Field, Record};
pub use sorter::sort_by_columns;
