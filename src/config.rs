use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CodeGeneratorError, Result};
use crate::types::{CharacterSelector, DEFAULT_AMBIGUOUS};

/// Everything a [`CodeGenerator`](crate::CodeGenerator) needs to know to draw codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub selector: CharacterSelector,
    pub remove_ambiguous: bool,
    pub ambiguous_set: String,
    /// Upper bound on batches drawn by a single bulk request. `None` is unbounded.
    pub max_bulk_rounds: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            selector: CharacterSelector::default(),
            remove_ambiguous: false,
            ambiguous_set: DEFAULT_AMBIGUOUS.to_string(),
            max_bulk_rounds: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(selector: impl Into<CharacterSelector>, remove_ambiguous: bool) -> Self {
        Self {
            selector: selector.into(),
            remove_ambiguous,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Computes the effective alphabet.
    ///
    /// Repeated characters are kept once, in order of first appearance. When
    /// `remove_ambiguous` is set every character of `ambiguous_set` is dropped.
    /// An empty result is an error.
    pub fn resolve(&self) -> Result<Vec<char>> {
        let raw = self.selector.characters();
        let mut alphabet: Vec<char> = Vec::with_capacity(raw.len());

        for c in raw.chars() {
            if self.remove_ambiguous && self.ambiguous_set.contains(c) {
                continue;
            }
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }

        if alphabet.is_empty() {
            return Err(CodeGeneratorError::Config(format!(
                "no characters left from {:?} (remove ambiguous: {})",
                raw, self.remove_ambiguous
            )));
        }

        debug!(
            "Resolved alphabet of {} characters from {:?} (remove ambiguous: {})",
            alphabet.len(),
            self.selector,
            self.remove_ambiguous
        );
        Ok(alphabet)
    }
}
