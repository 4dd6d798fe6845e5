use log::warn;
use serde::{Deserialize, Serialize};

pub const CHAR_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CHAR_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const CHAR_NUMERIC: &str = "0123456789";
pub const CHAR_SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

pub const CHAR_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const CHAR_ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const CHAR_UPPER_ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const CHAR_LOWER_ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
pub const CHAR_ALL: &str = r##"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters that are easily mistaken for one another when read by a person
pub const DEFAULT_AMBIGUOUS: &str = r#"B8G6I1l|0OQDS5Z2()[]{}:;,.'"`!$-~"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Alphanumeric,
    Alpha,
    Upper,
    Lower,
    Numeric,
    Symbols,
    UpperAlphanumeric,
    LowerAlphanumeric,
    All,
}

impl Preset {
    /// Presets in index order
    pub const TABLE: [Preset; 9] = [
        Preset::Alphanumeric,
        Preset::Alpha,
        Preset::Upper,
        Preset::Lower,
        Preset::Numeric,
        Preset::Symbols,
        Preset::UpperAlphanumeric,
        Preset::LowerAlphanumeric,
        Preset::All,
    ];

    pub fn from_index(index: usize) -> Option<Preset> {
        Self::TABLE.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn characters(&self) -> &'static str {
        match self {
            Preset::Alphanumeric => CHAR_ALPHANUMERIC,
            Preset::Alpha => CHAR_ALPHA,
            Preset::Upper => CHAR_UPPER,
            Preset::Lower => CHAR_LOWER,
            Preset::Numeric => CHAR_NUMERIC,
            Preset::Symbols => CHAR_SYMBOLS,
            Preset::UpperAlphanumeric => CHAR_UPPER_ALPHANUMERIC,
            Preset::LowerAlphanumeric => CHAR_LOWER_ALPHANUMERIC,
            Preset::All => CHAR_ALL,
        }
    }
}

/// Where the alphabet of a generator comes from.
///
/// Serialized externally tagged: `{"preset": "upper"}`, `{"literal": "ABC"}`
/// or `{"index": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSelector {
    Preset(Preset),
    /// A literal alphabet, used verbatim
    Literal(String),
    /// A raw preset index. Indices past the preset table select
    /// [`Preset::Alphanumeric`] instead of failing.
    Index(usize),
}

impl Default for CharacterSelector {
    fn default() -> Self {
        CharacterSelector::Preset(Preset::default())
    }
}

impl CharacterSelector {
    /// The raw characters this selector names, before any filtering
    pub fn characters(&self) -> &str {
        match self {
            CharacterSelector::Preset(preset) => preset.characters(),
            CharacterSelector::Literal(chars) => chars,
            CharacterSelector::Index(index) => match Preset::from_index(*index) {
                Some(preset) => preset.characters(),
                None => {
                    warn!("Preset index {} is out of range, falling back to alphanumeric", index);
                    Preset::Alphanumeric.characters()
                }
            },
        }
    }
}

impl From<Preset> for CharacterSelector {
    fn from(preset: Preset) -> Self {
        CharacterSelector::Preset(preset)
    }
}

impl From<usize> for CharacterSelector {
    fn from(index: usize) -> Self {
        CharacterSelector::Index(index)
    }
}

impl From<String> for CharacterSelector {
    fn from(chars: String) -> Self {
        CharacterSelector::Literal(chars)
    }
}

macro_rules! impl_literal_conversion {
    ($($type:ty),*) => {
        $(
            impl From<$type> for CharacterSelector {
                fn from(chars: $type) -> Self {
                    CharacterSelector::Literal(chars.to_string())
                }
            }
        )*
    };
}

impl_literal_conversion!(&str, &String);
