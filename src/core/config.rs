use serde::Deserialize;
use std::collections::BTreeMap;

use crate::encoders::algorithms::errors::AlgorithmError;
use crate::encoders::algorithms::{base58, base64};
use crate::encoders::codec::Codec;

/// Configuration for a single named algorithm loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlgorithmConfig {
    /// The digit symbols, ordered by digit value
    pub chars: String,
    /// Optional padding symbol (only "=" over the base64 alphabet is supported)
    #[serde(default)]
    pub padding: Option<String>,
    /// One-line description shown by `--list`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlgorithmConfig {
    /// Builds the codec this entry describes.
    ///
    /// The RFC 4648 alphabet with `=` padding maps onto [`Codec::Base64`] and
    /// the Bitcoin alphabet onto [`Codec::Base58`]; anything else becomes a
    /// custom codec.
    pub fn build(&self, name: &str) -> Result<Codec, AlgorithmError> {
        let chars = self.chars.as_bytes();
        match self.padding.as_deref() {
            Some("=") if chars == base64::ALPHABET.symbols() => Ok(Codec::Base64),
            Some(_) => Err(AlgorithmError::UnsupportedPadding {
                name: name.to_string(),
            }),
            None if chars == base58::ALPHABET.symbols() => Ok(Codec::Base58),
            None => Codec::custom(chars).map_err(|source| AlgorithmError::Alphabet {
                name: name.to_string(),
                source,
            }),
        }
    }
}

/// Collection of named algorithms.
#[derive(Debug, Deserialize)]
pub struct AlgorithmRegistry {
    /// Map of algorithm names to their configurations
    pub algorithms: BTreeMap<String, AlgorithmConfig>,
}

impl AlgorithmRegistry {
    /// Parses algorithm configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in algorithms bundled with the library.
    pub fn load_default() -> Result<Self, toml::de::Error> {
        Self::from_toml(include_str!("../../algorithms.toml"))
    }

    /// Retrieves an algorithm configuration by name.
    pub fn get_algorithm(&self, name: &str) -> Option<&AlgorithmConfig> {
        self.algorithms.get(name)
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.algorithms.keys().map(String::as_str)
    }
}
