//! Configuration management for the SIWO+ community detector

use crate::error::SiwoError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Aggregator combining the three weights of a triangle into one support value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mean {
    /// `(w1 + w2 + w3) / 3`
    Arithmetic,
    /// `(w1 * w2 * w3)^(1/3)`
    Geometric,
}

impl Mean {
    /// Combine the weights of a triangle's three edges
    #[inline]
    pub fn combine(self, w1: f64, w2: f64, w3: f64) -> f64 {
        match self {
            Mean::Arithmetic => (w1 + w2 + w3) / 3.0,
            Mean::Geometric => (w1 * w2 * w3).cbrt(),
        }
    }

    /// Single-character selector used on the command line
    pub fn selector(self) -> char {
        match self {
            Mean::Arithmetic => 'a',
            Mean::Geometric => 'g',
        }
    }
}

impl Default for Mean {
    fn default() -> Self {
        Mean::Arithmetic
    }
}

impl TryFrom<char> for Mean {
    type Error = SiwoError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a' => Ok(Mean::Arithmetic),
            'g' => Ok(Mean::Geometric),
            other => Err(SiwoError::InvalidMean(other.to_string())),
        }
    }
}

impl FromStr for Mean {
    type Err = SiwoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "arithmetic" => Ok(Mean::Arithmetic),
            "g" | "geometric" => Ok(Mean::Geometric),
            _ => Err(SiwoError::InvalidMean(s.to_string())),
        }
    }
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mean::Arithmetic => write!(f, "arithmetic"),
            Mean::Geometric => write!(f, "geometric"),
        }
    }
}

/// Correction passes applied after every node has been clustered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProcessing {
    /// Fold communities below the minimum size into their closest neighbour
    pub merge_small: bool,

    /// Move degree-1 nodes into their only neighbour's community
    pub merge_dangling: bool,
}

impl Default for PostProcessing {
    fn default() -> Self {
        Self {
            merge_small: false,
            merge_dangling: true,
        }
    }
}

/// Run configuration for the detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiwoConfig {
    /// Triangle weight aggregator, fixed for the whole run
    pub mean: Mean,

    /// Seed of the start-node sampler
    pub seed: u64,

    /// Correction passes run by `SiwoPlus::run`
    pub post_processing: PostProcessing,

    /// Communities smaller than this are merged by the small-community pass
    pub min_community_size: usize,
}

impl Default for SiwoConfig {
    fn default() -> Self {
        Self {
            mean: Mean::Arithmetic,
            seed: 1,
            post_processing: PostProcessing::default(),
            min_community_size: 3,
        }
    }
}

impl SiwoConfig {
    /// Create a new configuration with custom values
    pub fn new(
        mean: Mean,
        seed: u64,
        post_processing: PostProcessing,
        min_community_size: usize,
    ) -> Self {
        Self {
            mean,
            seed,
            post_processing,
            min_community_size,
        }
    }

    pub fn with_mean(mut self, mean: Mean) -> Self {
        self.mean = mean;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_post_processing(mut self, post_processing: PostProcessing) -> Self {
        self.post_processing = post_processing;
        self
    }

    pub fn with_min_community_size(mut self, min_community_size: usize) -> Self {
        self.min_community_size = min_community_size;
        self
    }

    /// Load a configuration from a JSON file; absent fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
