//! Partitioner
//!
//! Enumerates the values of a split attribute and carves the rows that
//! carry each value into a narrower table.
use crate::data::{Row, Schema, Value};
use crate::errors::Id3Error;
use std::collections::BTreeSet;

/// Distinct values of a column, in ascending order.
pub(crate) fn values_at(data: &[Row], column: usize) -> Vec<Value> {
    data.iter()
        .map(|r| r[column].clone())
        .collect::<BTreeSet<Value>>()
        .into_iter()
        .collect()
}

/// Copies of the rows whose `column` equals `value`, with that column dropped.
pub(crate) fn examples_at(data: &[Row], column: usize, value: &Value) -> Vec<Row> {
    data.iter()
        .filter(|r| &r[column] == value)
        .map(|r| {
            let mut narrowed = Vec::with_capacity(r.len().saturating_sub(1));
            narrowed.extend_from_slice(&r[..column]);
            narrowed.extend_from_slice(&r[column + 1..]);
            narrowed
        })
        .collect()
}

/// Get the distinct values observed in `attribute`'s column.
///
/// * `data` - Rows aligned with `schema`.
/// * `schema` - Attribute list.
/// * `attribute` - Column to enumerate.
pub fn get_values(data: &[Row], schema: &Schema, attribute: &str) -> Result<Vec<Value>, Id3Error> {
    let idx = schema.index(attribute)?;
    schema.check_rows(data)?;
    Ok(values_at(data, idx))
}

/// Get the subset of rows where `best` equals `value`, with the `best`
/// column removed from each returned row. The input rows are not modified.
///
/// * `data` - Rows aligned with `schema`.
/// * `schema` - Attribute list.
/// * `best` - Attribute being split on.
/// * `value` - Branch value to select.
pub fn get_examples(data: &[Row], schema: &Schema, best: &str, value: &Value) -> Result<Vec<Row>, Id3Error> {
    let idx = schema.index(best)?;
    schema.check_rows(data)?;
    Ok(examples_at(data, idx, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn table() -> (Schema, Vec<Row>) {
        let schema = Schema::new(["outlook", "wind", "play"]).unwrap();
        let data = vec![
            row!["Sunny", "Weak", "No"],
            row!["Rain", "Strong", "No"],
            row!["Overcast", "Weak", "Yes"],
            row!["Rain", "Weak", "Yes"],
        ];
        (schema, data)
    }

    #[test]
    fn test_get_values_sorted() {
        let (schema, data) = table();
        let values = get_values(&data, &schema, "outlook").unwrap();
        assert_eq!(values, vec![Value::from("Overcast"), Value::from("Rain"), Value::from("Sunny")]);
        assert!(get_values(&data, &schema, "humidity").is_err());
    }

    #[test]
    fn test_get_examples_drops_column() {
        let (schema, data) = table();
        let before = data.clone();
        let rain = get_examples(&data, &schema, "outlook", &Value::from("Rain")).unwrap();
        assert_eq!(rain, vec![row!["Strong", "No"], row!["Weak", "Yes"]]);

        let weak = get_examples(&data, &schema, "wind", &Value::from("Weak")).unwrap();
        assert_eq!(
            weak,
            vec![row!["Sunny", "No"], row!["Overcast", "Yes"], row!["Rain", "Yes"]]
        );
        assert_eq!(data, before);
    }

    #[test]
    fn test_get_examples_no_match() {
        let (schema, data) = table();
        let none = get_examples(&data, &schema, "outlook", &Value::from("Fog")).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_short_row() {
        let (schema, mut data) = table();
        data.push(row!["Sunny"]);
        assert!(matches!(
            get_values(&data, &schema, "wind"),
            Err(Id3Error::InvalidSchema(_))
        ));
        assert!(matches!(
            get_examples(&data, &schema, "wind", &Value::from("Weak")),
            Err(Id3Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_partitions_cover_rows() {
        let (schema, data) = table();
        let total: usize = get_values(&data, &schema, "wind")
            .unwrap()
            .iter()
            .map(|v| get_examples(&data, &schema, "wind", v).unwrap().len())
            .sum();
        assert_eq!(total, data.len());
    }
}
