use serde::{Deserialize, Serialize};

pub const RANDOM_WORD_API_URL: &str = "https://random-word-api.vercel.app/api";
pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const CATALOG_API_URL: &str = "http://localhost:8080/api/words";

/// Base URLs of the three upstream services.
///
/// Kept as plain strings; each call parses its own URL so that a bad base
/// surfaces as [`crate::WordBankError::InvalidUrl`] at the call that uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub random_words: String,
    pub catalog: String,
    pub dictionary: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            random_words: RANDOM_WORD_API_URL.to_owned(),
            catalog: CATALOG_API_URL.to_owned(),
            dictionary: DICTIONARY_API_URL.to_owned(),
        }
    }
}
