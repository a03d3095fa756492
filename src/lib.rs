//! # id3tree
//!
//! ID3 decision tree induction over tables of discrete values.
//!
//! ```
//! use id3tree::{row, Dataset, TreeBuilder, Value};
//!
//! let rows = vec![
//!     row!["Sunny", "Weak", "No"],
//!     row!["Overcast", "Weak", "Yes"],
//!     row!["Rain", "Strong", "No"],
//!     row!["Rain", "Weak", "Yes"],
//! ];
//! let data = Dataset::new(["Outlook", "Wind", "Play"], rows).unwrap();
//! let tree = TreeBuilder::default().fit(&data, "Play").unwrap();
//! let pred = tree.predict_row(&data.schema, &row!["Overcast", "Strong", "?"]).unwrap();
//! assert_eq!(pred, Some(&Value::from("Yes")));
//! ```

// Modules
pub mod builder;
pub mod config;
pub mod data;
pub mod errors;
pub mod majority;
pub mod partition;
pub mod selector;
pub mod statistics;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use builder::{make_tree, TreeBuilder};
pub use config::BuilderConfig;
pub use data::{Dataset, Row, Schema, Value};
pub use errors::Id3Error;
pub use tree::Tree;
