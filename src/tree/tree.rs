use crate::data::Value;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// An induced decision tree.
///
/// A node maps every value of its split attribute that was observed while
/// building it to a subtree. There is no fallback branch, see
/// [`Tree::predict_row`] for how unseen values are reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(Value),
    Node {
        attribute: String,
        children: BTreeMap<Value, Tree>,
    },
}

impl Tree {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// The predicted value if this is a leaf.
    pub fn leaf_value(&self) -> Option<&Value> {
        match self {
            Tree::Leaf(v) => Some(v),
            Tree::Node { .. } => None,
        }
    }

    /// The split attribute if this is an internal node.
    pub fn split_attribute(&self) -> Option<&str> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Node { attribute, .. } => Some(attribute),
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<Value, Tree>> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Node { children, .. } => Some(children),
        }
    }

    /// Subtree reached by following `value` from this node.
    pub fn child(&self, value: &Value) -> Option<&Tree> {
        self.children().and_then(|c| c.get(value))
    }

    /// Number of internal nodes on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node { children, .. } => 1 + children.values().map(Tree::depth).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node { children, .. } => children.values().map(Tree::n_leaves).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node { children, .. } => 1 + children.values().map(Tree::n_nodes).sum::<usize>(),
        }
    }

    /// Render the tree as nested JSON, `{attribute: {value: subtree}}`, with
    /// leaves as bare values. Branch keys use the value's display form.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Tree::Leaf(v) => value_to_json(v),
            Tree::Node { attribute, children } => {
                let branches: serde_json::Map<String, serde_json::Value> = children
                    .iter()
                    .map(|(k, t)| (k.to_string(), t.to_json_value()))
                    .collect();
                let mut node = serde_json::Map::with_capacity(1);
                node.insert(attribute.clone(), serde_json::Value::Object(branches));
                serde_json::Value::Object(node)
            }
        }
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        if let Tree::Node { attribute, children } = self {
            for (value, subtree) in children {
                let pad = "    ".repeat(depth);
                match subtree {
                    Tree::Leaf(leaf) => *out += &format!("{}{} = {}: {}\n", pad, attribute, value, leaf),
                    Tree::Node { .. } => {
                        *out += &format!("{}{} = {}\n", pad, attribute, value);
                        subtree.write_indented(out, depth + 1);
                    }
                }
            }
        }
    }
}

fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Str(s) => serde_json::Value::String(s.clone()),
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tree::Leaf(v) => writeln!(f, "{}", v),
            Tree::Node { .. } => {
                let mut r = String::new();
                self.write_indented(&mut r, 0);
                write!(f, "{}", r)
            }
        }
    }
}
