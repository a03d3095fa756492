use crate::errors::Id3Error;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single discrete attribute value.
///
/// Values are only ever compared for equality by the algorithm. The derived
/// ordering (booleans, then integers, then strings) exists so that branch
/// enumeration and tie-breaks are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// One observation, positionally aligned with a [`Schema`].
pub type Row = Vec<Value>;

/// Ordered attribute names together with a name to column lookup.
///
/// The lookup is computed once when the schema is created, every recursive
/// step of the builder derives its own narrowed copy with [`Schema::without`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<String>,
    columns: HashMap<String, usize>,
}

impl Schema {
    /// Create a new schema.
    ///
    /// * `attributes` - Attribute names, in column order. Names must be unique.
    pub fn new<I, S>(attributes: I) -> Result<Self, Id3Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        let mut columns = HashMap::with_capacity(attributes.len());
        for (i, name) in attributes.iter().enumerate() {
            if columns.insert(name.clone(), i).is_some() {
                return Err(Id3Error::InvalidSchema(format!("attribute {} appears more than once", name)));
            }
        }
        Ok(Schema { attributes, columns })
    }

    /// Column position of an attribute.
    pub fn index(&self, attribute: &str) -> Result<usize, Id3Error> {
        self.columns
            .get(attribute)
            .copied()
            .ok_or_else(|| Id3Error::UnknownAttribute(attribute.to_string()))
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.columns.contains_key(attribute)
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// A copy of this schema with `attribute` removed. Columns after the
    /// removed one shift left by one, matching rows produced by
    /// [`crate::partition::get_examples`].
    pub fn without(&self, attribute: &str) -> Result<Schema, Id3Error> {
        let idx = self.index(attribute)?;
        let remaining = self
            .attributes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, name)| name.clone());
        Schema::new(remaining)
    }

    /// Fails if the target is not one of the attributes.
    pub fn check_target(&self, target: &str) -> Result<usize, Id3Error> {
        self.index(target)
            .map_err(|_| Id3Error::InvalidSchema(format!("target {} is not in the attribute list", target)))
    }

    /// Fails if any row is not aligned with this schema.
    pub fn check_rows(&self, rows: &[Row]) -> Result<(), Id3Error> {
        match rows.iter().position(|r| r.len() != self.len()) {
            Some(i) => Err(Id3Error::InvalidSchema(format!(
                "row {} has {} values, expected {}",
                i,
                rows[i].len(),
                self.len()
            ))),
            None => Ok(()),
        }
    }
}

/// Rows of discrete values and the attribute list describing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub schema: Schema,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Create a new dataset, checking that every row matches the attribute list.
    ///
    /// * `attributes` - Attribute names, in column order.
    /// * `rows` - Observations, one value per attribute.
    pub fn new<I, S>(attributes: I, rows: Vec<Row>) -> Result<Self, Id3Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schema = Schema::new(attributes)?;
        schema.check_rows(&rows)?;
        Ok(Dataset { schema, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Build a row from anything convertible to [`Value`].
///
/// ```
/// use id3tree::row;
/// let r = row!["Sunny", "Hot", 3, true];
/// assert_eq!(r.len(), 4);
/// ```
#[macro_export]
macro_rules! row {
    ($($v:expr),* $(,)?) => {
        vec![$($crate::data::Value::from($v)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_index() {
        let schema = Schema::new(["a", "b", "c"]).unwrap();
        assert_eq!(schema.index("b").unwrap(), 1);
        assert_eq!(
            schema.index("z").unwrap_err(),
            Id3Error::UnknownAttribute("z".to_string())
        );
    }

    #[test]
    fn test_schema_duplicate() {
        let res = Schema::new(["a", "b", "a"]);
        assert!(matches!(res, Err(Id3Error::InvalidSchema(_))));
    }

    #[test]
    fn test_schema_without() {
        let schema = Schema::new(["a", "b", "c"]).unwrap();
        let narrowed = schema.without("a").unwrap();
        assert_eq!(narrowed.attributes(), &["b".to_string(), "c".to_string()]);
        assert_eq!(narrowed.index("c").unwrap(), 1);
        // Parent schema is left alone.
        assert_eq!(schema.len(), 3);
        assert!(schema.without("z").is_err());
    }

    #[test]
    fn test_dataset_row_length() {
        let rows = vec![row!["x", "y"], row!["x"]];
        let res = Dataset::new(["a", "b"], rows);
        assert!(matches!(res, Err(Id3Error::InvalidSchema(_))));
    }

    #[test]
    fn test_check_target() {
        let schema = Schema::new(["a", "b"]).unwrap();
        assert_eq!(schema.check_target("b").unwrap(), 1);
        assert!(matches!(schema.check_target("c"), Err(Id3Error::InvalidSchema(_))));
    }

    #[test]
    fn test_value_order() {
        let mut v = vec![Value::from("b"), Value::from(2), Value::from(true), Value::from("a")];
        v.sort();
        assert_eq!(v, vec![Value::Bool(true), Value::Int(2), Value::from("a"), Value::from("b")]);
        assert_eq!(Value::from("Sunny").to_string(), "Sunny");
    }
}
