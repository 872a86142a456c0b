use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumString, EnumVariantNames};

use crate::error::Result;

/// What a batch does with a primitive that doesn't fit.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumVariantNames, EnumString,
)]
pub enum OverflowPolicy {
    /// Refuse the primitive with an error.
    #[default]
    Reject,
    /// Drop the primitive and log a warning.
    Truncate,
}

/// Knobs for turning a list of primitives into a geometry graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildSettings {
    pub overflow: OverflowPolicy,
    /// Chunks with fewer primitives than this are added as bare primitives.
    pub min_batch_size: usize,
    /// Wraps every batch in a bounding volume of its lanes.
    pub bound_batches: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Reject,
            min_batch_size: 2,
            bound_batches: false,
        }
    }
}

impl BuildSettings {
    /// Parses settings from YAML. Missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        lanetrace_debug!("Parsed build settings {:?}", settings);
        Ok(settings)
    }

    /// Loads settings from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        lanetrace_debug!("Loading build settings from '{}'", path.display());
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes these settings to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
