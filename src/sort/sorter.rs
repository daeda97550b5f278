use super::compare::SortKey;
use super::directive::{SortDirective, SortSpec};
use super::error::SortError;
use super::record::{Field, Record};
use crate::document::node::Node;
use log::debug;
use std::borrow::Cow;
use std::cmp::Ordering;

/// One extracted column: a prepared sort key per record, aligned by index.
struct Column<'a> {
    key: &'a str,
    keys: Vec<SortKey<'a>>,
    directive: SortDirective,
}

/// Sorts `records` in place by several columns at once.
///
/// Columns are taken in `spec` order: the first is the primary key, each
/// following one breaks ties of the previous ones. A dotted column key
/// (`team.hierarchy`) descends into nested records or mappings. Records that
/// compare equal on every column keep their relative order.
///
/// Returns `Ok(false)` without touching anything when `spec` or `records` is
/// empty, and `Ok(true)` after sorting.
///
/// # Errors
///
/// Fails with [`SortError::MissingColumn`] when some record lacks a segment
/// of a column key, and [`SortError::NotComparable`] when a column ends on a
/// nested record. All columns are extracted before anything moves, so on
/// error `records` is unchanged.
///
/// ```
/// use nodequill::{sort_by_columns, SortDirective, SortSpec};
/// use nodequill::document::parser::parse_document;
///
/// let mut rows = match parse_document("[{n: b, r: 1}, {n: a, r: 1}, {n: c, r: 0}]").unwrap() {
///     nodequill::Node::Sequence(rows) => rows,
///     _ => unreachable!(),
/// };
///
/// let mut spec = SortSpec::new();
/// spec.insert("r".to_string(), SortDirective::ascending());
/// spec.insert("n".to_string(), SortDirective::descending());
///
/// assert_eq!(sort_by_columns(&mut rows, &spec), Ok(true));
/// let names: Vec<_> = rows.iter().map(|r| r.get("n").unwrap().to_string()).collect();
/// assert_eq!(names, ["c", "b", "a"]);
/// ```
pub fn sort_by_columns<R: Record>(records: &mut [R], spec: &SortSpec) -> Result<bool, SortError> {
    if spec.is_empty() || records.is_empty() {
        debug!(
            "Nothing to sort ({} records, {} columns)",
            records.len(),
            spec.len()
        );
        return Ok(false);
    }

    let order = {
        let records: &[R] = records;
        let columns = spec
            .iter()
            .map(|(key, directive)| {
                extract_column(records, key).map(|values| Column {
                    key,
                    keys: values
                        .into_iter()
                        .map(|value| directive.key(value))
                        .collect(),
                    directive: *directive,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for column in &columns {
            debug!("Sorting by '{}' ({})", column.key, column.directive);
        }
        sort_permutation(records.len(), &columns)
    };

    apply_permutation(records, order);
    Ok(true)
}

/// Projects every record through the segments of `key`.
fn extract_column<'a, R: Record>(
    records: &'a [R],
    key: &str,
) -> Result<Vec<Cow<'a, Node>>, SortError> {
    let segments: Vec<&str> = key.split('.').collect();

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut field = Field::Record(record);
            for segment in &segments {
                field = field.project(segment).ok_or_else(|| {
                    debug!("Record {} has no field '{}' for column '{}'", index, segment, key);
                    SortError::MissingColumn {
                        column: key.to_string(),
                        segment: segment.to_string(),
                        index,
                    }
                })?;
            }
            field.into_node().ok_or_else(|| SortError::NotComparable {
                column: key.to_string(),
                index,
            })
        })
        .collect()
}

/// Computes the sorted order of `0..len` as a list of source indices.
fn sort_permutation(len: usize, columns: &[Column<'_>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.sort_by(|&i, &j| {
        columns
            .iter()
            .map(|column| {
                column
                    .directive
                    .compare_keys(&column.keys[i], &column.keys[j])
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .then(i.cmp(&j))
    });
    order
}

/// Moves the element at `order[i]` to position `i`, following each cycle of
/// the permutation with swaps.
fn apply_permutation<R>(records: &mut [R], mut order: Vec<usize>) {
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }
            records.swap(current, next);
            current = next;
        }
    }
}
