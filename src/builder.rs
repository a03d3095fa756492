//! Tree Builder
//!
//! The recursive ID3 driver. Each call either settles on a leaf or picks the
//! attribute with the highest information gain and recurses once per value
//! of that attribute, on the matching rows with the attribute's column
//! removed.
use crate::config::BuilderConfig;
use crate::data::{Dataset, Row, Schema, Value};
use crate::errors::Id3Error;
use crate::majority::majority_at;
use crate::partition::{examples_at, values_at};
use crate::selector::choose_at;
use crate::tree::Tree;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;

/// Build a decision tree for `target` from `data`, sequentially.
///
/// `depth` is only a counter, used in log output. Pass 0 for the root.
///
/// * `data` - Rows aligned with `schema`, must not be empty.
/// * `schema` - Attribute list, including `target`.
/// * `target` - Name of the class attribute.
/// * `depth` - Recursion depth of this call.
pub fn make_tree(data: &[Row], schema: &Schema, target: &str, depth: usize) -> Result<Tree, Id3Error> {
    schema.check_target(target)?;
    schema.check_rows(data)?;
    grow(data, schema, target, depth, usize::MAX)
}

/// Recursive step. Nodes with at least `parallel_min_rows` rows build their
/// children on the current rayon pool. Rows must already be aligned with
/// `schema`, partitions built here stay aligned with the narrowed schema.
fn grow(
    data: &[Row],
    schema: &Schema,
    target: &str,
    depth: usize,
    parallel_min_rows: usize,
) -> Result<Tree, Id3Error> {
    let target_idx = schema.check_target(target)?;

    // Majority of nothing is undefined.
    if data.is_empty() {
        return Err(Id3Error::EmptyInput("tree induction".to_string()));
    }

    // Only the target is left.
    if schema.len() <= 1 {
        let default = majority_at(data, target_idx).ok_or_else(|| Id3Error::EmptyInput("majority vote".to_string()))?;
        trace!("Depth {}: no attributes left, majority leaf {}.", depth, default);
        return Ok(Tree::Leaf(default));
    }

    let first = &data[0][target_idx];
    if data.iter().all(|r| &r[target_idx] == first) {
        trace!("Depth {}: pure leaf {} over {} rows.", depth, first, data.len());
        return Ok(Tree::Leaf(first.clone()));
    }

    let best = choose_at(schema, data, target_idx)
        .ok_or_else(|| Id3Error::InvalidSchema(format!("no attribute left to split on besides {}", target)))?;
    let column = schema.index(&best.attribute)?;
    let values = values_at(data, column);
    let child_schema = schema.without(&best.attribute)?;
    debug!(
        "Depth {}: splitting {} rows on {} (gain {:.4}) into {} branches.",
        depth,
        data.len(),
        best.attribute,
        best.gain,
        values.len()
    );

    let build = |value: Value| -> Result<(Value, Tree), Id3Error> {
        let examples = examples_at(data, column, &value);
        let subtree = grow(&examples, &child_schema, target, depth + 1, parallel_min_rows)?;
        Ok((value, subtree))
    };
    let children: BTreeMap<Value, Tree> = if data.len() >= parallel_min_rows && values.len() > 1 {
        values.into_par_iter().map(build).collect::<Result<_, _>>()?
    } else {
        values.into_iter().map(build).collect::<Result<_, _>>()?
    };

    Ok(Tree::Node {
        attribute: best.attribute,
        children,
    })
}

/// Fits ID3 trees with a configured worker pool.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    pub cfg: BuilderConfig,
}

impl TreeBuilder {
    /// Create a new builder, checking the configuration.
    pub fn new(cfg: BuilderConfig) -> Result<Self, Id3Error> {
        cfg.validate()?;
        Ok(TreeBuilder { cfg })
    }

    /// Set the number of threads on the builder.
    /// * `num_threads` - Threads used to build sibling subtrees, `None` for all cores.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }

    /// Set the row count from which a node builds its children in parallel.
    /// * `parallel_min_rows` - Minimum rows at a node to fan out its children.
    pub fn set_parallel_min_rows(mut self, parallel_min_rows: usize) -> Self {
        self.cfg.parallel_min_rows = parallel_min_rows;
        self
    }

    /// Fit a tree predicting `target` from the other attributes of `data`.
    ///
    /// * `data` - Training rows and their attribute list.
    /// * `target` - Name of the class attribute.
    pub fn fit(&self, data: &Dataset, target: &str) -> Result<Tree, Id3Error> {
        self.cfg.validate()?;
        data.schema.check_target(target)?;
        data.schema.check_rows(&data.rows)?;

        let start = Instant::now();
        info!(
            "Fitting tree for {} on {} rows and {} attributes.",
            target,
            data.n_rows(),
            data.schema.len().saturating_sub(1)
        );

        let mut pool_builder = rayon::ThreadPoolBuilder::new();
        if let Some(num_threads) = self.cfg.num_threads {
            pool_builder = pool_builder.num_threads(num_threads);
        }
        let pool = pool_builder
            .build()
            .map_err(|e| Id3Error::ThreadPool(e.to_string()))?;

        let tree = pool.install(|| grow(&data.rows, &data.schema, target, 0, self.cfg.parallel_min_rows))?;

        info!(
            "Finished tree with {} nodes, {} leaves and depth {} in {:.3} seconds.",
            tree.n_nodes(),
            tree.n_leaves(),
            tree.depth(),
            start.elapsed().as_secs_f64()
        );
        Ok(tree)
    }
}
