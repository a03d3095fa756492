use super::tree::Tree;
use crate::data::{Dataset, Schema, Value};
use crate::errors::Id3Error;
use rayon::prelude::*;

impl Tree {
    /// Walk the tree for one row.
    ///
    /// Returns `Ok(None)` when the row carries a value that no branch of the
    /// visited node was built for.
    ///
    /// * `schema` - Attribute list `row` is aligned with. It must contain
    ///   every attribute the tree splits on, the target column is ignored.
    /// * `row` - Observation to classify.
    pub fn predict_row(&self, schema: &Schema, row: &[Value]) -> Result<Option<&Value>, Id3Error> {
        if row.len() != schema.len() {
            return Err(Id3Error::InvalidSchema(format!(
                "row has {} values, expected {}",
                row.len(),
                schema.len()
            )));
        }
        let mut node = self;
        loop {
            match node {
                Tree::Leaf(v) => return Ok(Some(v)),
                Tree::Node { attribute, children } => {
                    let idx = schema.index(attribute)?;
                    match children.get(&row[idx]) {
                        Some(child) => node = child,
                        None => return Ok(None),
                    }
                }
            }
        }
    }

    /// Classify every row of a dataset, in parallel.
    pub fn predict(&self, data: &Dataset) -> Result<Vec<Option<Value>>, Id3Error> {
        data.rows
            .par_iter()
            .map(|row| self.predict_row(&data.schema, row).map(|v| v.cloned()))
            .collect()
    }
}
