use crate::data::{Row, Schema, Value};
use crate::errors::Id3Error;
use crate::statistics::value_counts;

/// Most frequent value in a column. Ties go to the greatest value.
pub(crate) fn majority_at(data: &[Row], column: usize) -> Option<Value> {
    value_counts(data.iter().map(|r| &r[column]))
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(v, _)| v.clone())
}

/// Find the most common value of `target` in `data`.
///
/// * `schema` - Attribute list the rows are aligned with.
/// * `data` - Rows to vote over, must not be empty.
/// * `target` - Name of the class attribute.
pub fn majority(schema: &Schema, data: &[Row], target: &str) -> Result<Value, Id3Error> {
    let idx = schema.index(target)?;
    schema.check_rows(data)?;
    majority_at(data, idx).ok_or_else(|| Id3Error::EmptyInput("majority vote".to_string()))
}
