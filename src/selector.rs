use crate::data::{Row, Schema};
use crate::errors::Id3Error;
use crate::statistics::gain_at;
use std::cmp::Ordering;

/// A split attribute together with its information gain.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub attribute: String,
    pub gain: f64,
}

impl Candidate {
    /// Gain descending, then name descending.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .gain
            .total_cmp(&self.gain)
            .then_with(|| other.attribute.cmp(&self.attribute))
    }
}

/// Best non-target column of rows already aligned with `schema`.
pub(crate) fn choose_at(schema: &Schema, data: &[Row], target_idx: usize) -> Option<Candidate> {
    let mut candidates: Vec<Candidate> = schema
        .attributes()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_idx)
        .map(|(i, name)| Candidate {
            attribute: name.clone(),
            gain: gain_at(data, i, target_idx),
        })
        .collect();
    candidates.sort_by(Candidate::rank);
    candidates.into_iter().next()
}

/// Pick the attribute with the largest information gain.
///
/// Every attribute of `schema` except `target` is a candidate. When two
/// candidates have the same gain, the one with the greater name wins.
///
/// * `schema` - Attribute list the rows are aligned with.
/// * `data` - Rows to split, must not be empty.
/// * `target` - Name of the class attribute.
pub fn choose_attribute(schema: &Schema, data: &[Row], target: &str) -> Result<Candidate, Id3Error> {
    let target_idx = schema.check_target(target)?;
    schema.check_rows(data)?;
    if data.is_empty() {
        return Err(Id3Error::EmptyInput("attribute selection".to_string()));
    }
    choose_at(schema, data, target_idx)
        .ok_or_else(|| Id3Error::InvalidSchema(format!("no attribute left to split on besides {}", target)))
}
