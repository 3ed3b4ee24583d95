use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Feature order expected by the fitted tree: pH, rainfall, temperature,
/// area in hectares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    pub ph: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub area_hectares: f64,
}

impl PredictionInput {
    fn features(&self) -> [f64; 4] {
        [self.ph, self.rainfall, self.temperature, self.area_hectares]
    }
}

/// One node of the fitted regression tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        value: f64,
    },
}

/// Pre-trained decision-tree regressor, loaded once at startup. Parameters
/// are immutable for the process lifetime, so prediction is a pure function
/// of its four inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldModel {
    root: Node,
}

impl YieldModel {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read model artifact {}", path.display()))?;
        let model = serde_json::from_str(&raw).context("parse model artifact")?;
        Ok(model)
    }

    /// No plausibility bounds on inputs: negative rainfall walks the tree
    /// like any other value.
    pub fn predict(&self, input: &PredictionInput) -> f64 {
        let features = input.features();
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}
