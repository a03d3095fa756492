//! Errors
//!
//! Custom error types used throughout the `id3tree` crate.
use thiserror::Error;

/// Errors that can occur while inducing or querying a tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// Rows and attributes disagree, or the target is not an attribute.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    /// A statistic or a vote was requested over zero rows.
    #[error("Empty input: {0} requires at least one row.")]
    EmptyInput(String),
    /// Column lookup for a name that is not in the current attribute list.
    #[error("Attribute {0} is not present in the current attribute list.")]
    UnknownAttribute(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to read a configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
    /// The worker pool could not be created.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
}
