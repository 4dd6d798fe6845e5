use std::collections::HashSet;

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::code::{capacity, draw};
use crate::config::GeneratorConfig;
use crate::errors::{CodeGeneratorError, Result};
use crate::readable::human_readable_number;
use crate::types::{CharacterSelector, Preset};

/// Length used when a caller has no preference
pub const DEFAULT_LENGTH: usize = 8;

/// Largest number of codes drawn per bulk round
pub const MAX_BATCH: usize = 10_000;

/// Draws random codes from a configurable alphabet.
///
/// The randomness is not suitable for secrets: codes are drawn from a seedable
/// [`StdRng`], with no guarantee beyond uniformity.
///
/// A generator is not synchronized. Mutating its configuration while another
/// call site draws from it needs external locking.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    config: GeneratorConfig,
    alphabet: Vec<char>,
    rng: StdRng,
}

impl CodeGenerator {
    pub fn new(selector: impl Into<CharacterSelector>, remove_ambiguous: bool) -> Result<Self> {
        Self::from_config(GeneratorConfig::new(selector, remove_ambiguous))
    }

    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let alphabet = config.resolve()?;
        Ok(Self {
            config,
            alphabet,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replaces the random source with one seeded from `seed`, so the codes
    /// that follow are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The effective alphabet, after ambiguous characters were removed
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn remove_ambiguous(&self) -> bool {
        self.config.remove_ambiguous
    }

    pub fn ambiguous_set(&self) -> &str {
        &self.config.ambiguous_set
    }

    /// Number of distinct codes of `length` characters the current alphabet allows.
    /// `None` when the count does not fit in a `u128`.
    pub fn capacity(&self, length: usize) -> Option<u128> {
        capacity(self.alphabet.len(), length)
    }

    pub fn generate(&mut self, length: usize) -> Result<String> {
        if length < 1 {
            return Err(CodeGeneratorError::Validation(length));
        }
        Ok(draw(&mut self.rng, &self.alphabet, length))
    }

    /// Generates `count` distinct codes of `length` characters.
    ///
    /// Codes are drawn in rounds of at most [`MAX_BATCH`] and duplicates are
    /// discarded, so the closer `count` gets to [`capacity`](Self::capacity)
    /// the more rounds are needed. Without a `max_bulk_rounds` limit there is
    /// no bound on how long that takes.
    pub fn bulk(&mut self, count: usize, length: usize) -> Result<Vec<String>> {
        if length < 1 {
            return Err(CodeGeneratorError::Validation(length));
        }

        if let Some(capacity) = self.capacity(length) {
            if count as u128 > capacity {
                return Err(self.capacity_error(count, capacity));
            }
        }

        // sized for one batch and grown as rounds add codes
        let mut seen: HashSet<String> = HashSet::with_capacity(count.min(MAX_BATCH));
        let mut codes = Vec::with_capacity(count.min(MAX_BATCH));
        let mut rounds = 0;

        while codes.len() < count {
            if let Some(limit) = self.config.max_bulk_rounds {
                if rounds >= limit {
                    return Err(CodeGeneratorError::Exhausted {
                        requested: count,
                        generated: codes.len(),
                        rounds,
                    });
                }
            }

            let batch = (count - codes.len()).min(MAX_BATCH);
            for _ in 0..batch {
                let code = draw(&mut self.rng, &self.alphabet, length);
                if seen.insert(code.clone()) {
                    codes.push(code);
                }
            }
            rounds += 1;
            trace!("Bulk round {}: {}/{} unique codes", rounds, codes.len(), count);
        }

        debug!("Generated {} unique codes of length {} in {} rounds", count, length, rounds);
        Ok(codes)
    }

    fn capacity_error(&self, requested: usize, capacity: u128) -> CodeGeneratorError {
        let advice = if self.config.remove_ambiguous {
            "Try increasing the code length and/or disabling ambiguous character removal."
        } else {
            "Try increasing the code length."
        };
        CodeGeneratorError::Capacity {
            requested,
            capacity,
            message: format!(
                "Cannot generate more than {} possible unique codes. {}",
                human_readable_number(capacity),
                advice
            ),
        }
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            alphabet: Preset::default().characters().chars().collect(),
            rng: StdRng::from_os_rng(),
        }
    }
}

pub trait GeneratorSettings {
    /// Selects the alphabet and whether ambiguous characters are stripped from it.
    /// On error the generator keeps its previous configuration.
    fn set_characters(&mut self, selector: impl Into<CharacterSelector>, remove_ambiguous: bool) -> Result<&mut Self>;

    /// Stores the ambiguous flag and, when `ambiguous_set` is a non-empty string, the set itself.
    ///
    /// This does not touch the active alphabet. The new values apply the next
    /// time the alphabet is resolved, through [`set_characters`](Self::set_characters)
    /// or [`reapply`](Self::reapply). Until then the flag only changes the advice
    /// given when a bulk request exceeds capacity.
    fn set_ambiguous(&mut self, remove_ambiguous: bool, ambiguous_set: Option<&str>) -> &mut Self;

    /// Sets the round limit for [`CodeGenerator::bulk`]
    fn set_max_bulk_rounds(&mut self, rounds: Option<usize>) -> &mut Self;

    /// Re-resolves the alphabet from the stored selector, flag and ambiguous set
    fn reapply(&mut self) -> Result<&mut Self>;
}

impl GeneratorSettings for CodeGenerator {
    fn set_characters(&mut self, selector: impl Into<CharacterSelector>, remove_ambiguous: bool) -> Result<&mut Self> {
        let config = GeneratorConfig {
            selector: selector.into(),
            remove_ambiguous,
            ..self.config.clone()
        };
        self.alphabet = config.resolve()?;
        self.config = config;
        Ok(self)
    }

    fn set_ambiguous(&mut self, remove_ambiguous: bool, ambiguous_set: Option<&str>) -> &mut Self {
        if let Some(set) = ambiguous_set.filter(|s| !s.is_empty()) {
            self.config.ambiguous_set = set.to_string();
        }
        self.config.remove_ambiguous = remove_ambiguous;
        self
    }

    fn set_max_bulk_rounds(&mut self, rounds: Option<usize>) -> &mut Self {
        self.config.max_bulk_rounds = rounds;
        self
    }

    fn reapply(&mut self) -> Result<&mut Self> {
        self.alphabet = self.config.resolve()?;
        Ok(self)
    }
}
