//! Builder Configuration
//!
//! Settings for how the tree builder schedules its work. None of them change
//! the shape of the induced tree.
use crate::errors::Id3Error;
use crate::utils::validate_positive_usize_parameter;
use serde::{Deserialize, Serialize};

fn default_num_threads() -> Option<usize> {
    None
}
fn default_parallel_min_rows() -> usize {
    1024
}

/// Configuration for [`crate::builder::TreeBuilder`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BuilderConfig {
    /// Number of worker threads. `None` uses every available core.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
    /// Nodes with at least this many rows build their children in parallel.
    #[serde(default = "default_parallel_min_rows")]
    pub parallel_min_rows: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            num_threads: default_num_threads(),
            parallel_min_rows: default_parallel_min_rows(),
        }
    }
}

impl BuilderConfig {
    /// Load a configuration from a JSON string. Missing fields take their defaults.
    ///
    /// * `json_str` - JSON object with any of the configuration fields.
    pub fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let cfg = serde_json::from_str::<Self>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Id3Error> {
        if let Some(n) = self.num_threads {
            validate_positive_usize_parameter(n, "num_threads")?;
        }
        validate_positive_usize_parameter(self.parallel_min_rows, "parallel_min_rows")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_config_default() {
        let cfg = BuilderConfig::default();
        assert_eq!(cfg.num_threads, None);
        assert_eq!(cfg.parallel_min_rows, 1024);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = BuilderConfig::from_json(r#"{"num_threads": 2}"#).unwrap();
        assert_eq!(cfg.num_threads, Some(2));
        assert_eq!(cfg.parallel_min_rows, 1024);
    }

    #[test]
    fn test_from_json_invalid() {
        let res = BuilderConfig::from_json(r#"{"num_threads": 0}"#);
        assert_eq!(
            res.unwrap_err(),
            Id3Error::InvalidParameter(
                "num_threads".to_string(),
                "a value of at least 1".to_string(),
                "0".to_string()
            )
        );
        assert!(matches!(
            BuilderConfig::from_json("{not json"),
            Err(Id3Error::UnableToRead(_))
        ));
    }
}
