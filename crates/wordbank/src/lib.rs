use std::sync::Arc;

use thiserror::Error;

mod assembly;
mod catalog_api;
mod config;
mod dictionary_api;
mod enrich;
mod random_word_api;
mod tier;
mod transport;
mod words;

pub use assembly::HARD_WORD_LEVEL;
pub use config::{Endpoints, CATALOG_API_URL, DICTIONARY_API_URL, RANDOM_WORD_API_URL};
pub use tier::{tier_config, Tier, TierConfig, WordSource, WORD_TIME_LIMIT};
pub use transport::{get_json, HttpRequest, HttpTransport, Transport};
pub use words::{
    CatalogResponse, Definition, DictionaryEntry, Meaning, Phonetic, RawCatalogItem,
    WordWithDetails,
};

pub type Result<T> = std::result::Result<T, WordBankError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordBankError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("no data returned")]
    NoData,
    #[error("failed to decode response: {0}")]
    Decoding(String),
    #[error("none of the words have pronunciation audio")]
    NoAudioAvailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("not enough playable words: needed {required}, found {available}")]
    InsufficientWords { required: usize, available: usize },
    #[error("authentication required")]
    AuthenticationRequired,
}

/// Entry point to every upstream word service.
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct WordBank {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl WordBank {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_transport(endpoints, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(endpoints: Endpoints, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Random words of exactly `length` letters.
    pub async fn fetch_random_words(&self, count: usize, length: usize) -> Result<Vec<String>> {
        random_word_api::get_random_words(
            self.transport.as_ref(),
            &self.endpoints.random_words,
            count,
            Some(length),
        )
        .await
    }

    /// Random words spread over every length in `min_length..=max_length`.
    ///
    /// A failed length is skipped. The pool is shuffled and capped at
    /// `count * 3` to leave room for words later dropped for lacking audio.
    pub async fn fetch_random_words_in_range(
        &self,
        count: usize,
        min_length: usize,
        max_length: usize,
    ) -> Result<Vec<String>> {
        random_word_api::get_random_words_in_range(
            self.transport.as_ref(),
            &self.endpoints.random_words,
            count,
            min_length,
            max_length,
        )
        .await
    }

    pub async fn fetch_catalog_words(
        &self,
        count: usize,
        min_level: u32,
        max_level: u32,
        token: Option<&str>,
    ) -> Result<Vec<RawCatalogItem>> {
        catalog_api::get_catalog_words(
            self.transport.as_ref(),
            &self.endpoints.catalog,
            count,
            min_level,
            max_level,
            token,
        )
        .await
    }

    /// First dictionary entry for `word`.
    pub async fn fetch_word_details(&self, word: &str) -> Result<DictionaryEntry> {
        dictionary_api::get_entry(self.transport.as_ref(), &self.endpoints.dictionary, word).await
    }

    /// Looks up every word concurrently and keeps the first `target_count`
    /// that come back with audio, in arrival order.
    pub async fn enrich_words(
        &self,
        words: Vec<String>,
        target_count: usize,
    ) -> Result<Vec<WordWithDetails>> {
        enrich::enrich_words(
            self.transport.as_ref(),
            &self.endpoints.dictionary,
            words,
            target_count,
        )
        .await
    }
}
