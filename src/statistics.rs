//! Statistics
//!
//! Shannon entropy of the target column and the information gain of
//! splitting on a candidate attribute.
use crate::data::{Row, Schema, Value};
use crate::errors::Id3Error;
use hashbrown::HashMap;

/// Count how many times each value occurs.
pub(crate) fn value_counts<'a, I>(values: I) -> HashMap<&'a Value, usize>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut counts = HashMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Entropy in bits of a sequence of values.
///
/// Counts are summed in ascending order so that two columns with the same
/// distribution always produce the same bits.
pub(crate) fn entropy_of<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut counts: Vec<usize> = value_counts(values).into_values().collect();
    counts.sort_unstable();
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    counts.iter().fold(0.0, |acc, &c| {
        let p = c as f64 / n;
        acc - p * p.log2()
    })
}

/// Information gain of splitting on `column`, with the class in `target_column`.
pub(crate) fn gain_at(data: &[Row], column: usize, target_column: usize) -> f64 {
    let n = data.len() as f64;
    let mut groups: HashMap<&Value, Vec<&Value>> = HashMap::new();
    for row in data {
        groups.entry(&row[column]).or_default().push(&row[target_column]);
    }
    // Sum in an order fixed by the subsets themselves, not by their labels,
    // so relabelled copies of an attribute tie exactly.
    let mut subsets: Vec<(usize, f64)> = groups
        .into_values()
        .map(|targets| (targets.len(), entropy_of(targets)))
        .collect();
    subsets.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));

    let subset_entropy: f64 = subsets.iter().map(|&(len, h)| (len as f64 / n) * h).sum();
    entropy_of(data.iter().map(|r| &r[target_column])) - subset_entropy
}

/// Calculate the entropy of the `target` column over `data`.
///
/// * `schema` - Attribute list the rows are aligned with.
/// * `data` - Rows to measure, must not be empty.
/// * `target` - Name of the class attribute.
pub fn entropy(schema: &Schema, data: &[Row], target: &str) -> Result<f64, Id3Error> {
    let idx = schema.index(target)?;
    schema.check_rows(data)?;
    if data.is_empty() {
        return Err(Id3Error::EmptyInput("entropy".to_string()));
    }
    Ok(entropy_of(data.iter().map(|r| &r[idx])))
}

/// Calculate the information gain (reduction in entropy of `target`)
/// obtained by splitting `data` on `attribute`.
///
/// * `schema` - Attribute list the rows are aligned with.
/// * `data` - Rows to measure, must not be empty.
/// * `attribute` - Candidate split attribute.
/// * `target` - Name of the class attribute.
pub fn gain(schema: &Schema, data: &[Row], attribute: &str, target: &str) -> Result<f64, Id3Error> {
    let target_idx = schema.check_target(target)?;
    let idx = schema.index(attribute)?;
    schema.check_rows(data)?;
    if data.is_empty() {
        return Err(Id3Error::EmptyInput("gain".to_string()));
    }
    Ok(gain_at(data, idx, target_idx))
}
