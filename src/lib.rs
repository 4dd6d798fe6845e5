//! Random code generation for license keys, invite codes and vouchers.
//!
//! ```
//! use code_weaver::{CodeGenerator, GeneratorSettings, Preset};
//!
//! let mut generator = CodeGenerator::new(Preset::UpperAlphanumeric, true)?;
//! let code = generator.generate(10)?;
//! assert_eq!(code.chars().count(), 10);
//!
//! generator.set_characters("ABC", false)?;
//! let codes = generator.bulk(5, 4)?;
//! assert_eq!(codes.len(), 5);
//! # Ok::<(), code_weaver::CodeGeneratorError>(())
//! ```

pub mod config;
pub mod errors;
pub mod generator;
pub mod types;
mod code;
mod readable;

pub use config::GeneratorConfig;
pub use errors::{CodeGeneratorError, Result};
pub use generator::{CodeGenerator, GeneratorSettings, DEFAULT_LENGTH, MAX_BATCH};
pub use types::{CharacterSelector, Preset, DEFAULT_AMBIGUOUS};
