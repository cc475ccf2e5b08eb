use tracing::{debug, info, warn};

use crate::tier::{TierConfig, WordSource};
use crate::words::WordWithDetails;
use crate::{dictionary_api, Result, WordBank, WordBankError};

/// Catalog level used for hard words when the caller has no preference.
pub const HARD_WORD_LEVEL: u32 = 8;

impl WordBank {
    /// Assembles the word list for one level.
    ///
    /// Random tiers over-fetch and keep the first words found with audio.
    /// Catalog tiers need `token`; their words already carry metadata and
    /// are only filtered for audio. A thin catalog result is logged, not
    /// failed.
    pub async fn fetch_words_for_level(
        &self,
        config: &TierConfig,
        token: Option<&str>,
    ) -> Result<Vec<WordWithDetails>> {
        let wanted = config.word_fetch_count();
        match config.source {
            WordSource::Random {
                min_length,
                max_length,
            } => {
                let words = self
                    .fetch_random_words_in_range(wanted.saturating_mul(3), min_length, max_length)
                    .await?;
                self.enrich_words(words, wanted).await
            }
            WordSource::Catalog {
                min_level,
                max_level,
            } => {
                let items = self
                    .fetch_catalog_words(wanted, min_level, max_level, token)
                    .await?;
                let words = playable(items.into_iter().map(WordWithDetails::from), wanted);
                if config.is_short_of_words(words.len()) {
                    warn!(
                        level = config.level,
                        playable = words.len(),
                        floor = config.catalog_warning_floor(),
                        "few playable catalog words"
                    );
                }
                info!(level = config.level, words = words.len(), "level words ready");
                Ok(words)
            }
        }
    }

    /// `count` random words of one length, each with audio.
    pub async fn fetch_random_words_with_details(
        &self,
        count: usize,
        length: usize,
    ) -> Result<Vec<WordWithDetails>> {
        let words = self.fetch_random_words(count.saturating_mul(3), length).await?;
        self.enrich_words(words, count).await
    }

    /// Exactly `count` catalog words from a single level, each with audio.
    pub async fn fetch_hard_words_with_details(
        &self,
        count: usize,
        token: Option<&str>,
        level: u32,
    ) -> Result<Vec<WordWithDetails>> {
        let items = self
            .fetch_catalog_words(count.saturating_mul(2), level, level, token)
            .await?;
        let fetched = items.len();
        let words = playable(items.into_iter().map(WordWithDetails::from), usize::MAX);
        debug!(level, fetched, playable = words.len(), "hard words");
        if words.len() < count {
            return Err(WordBankError::InsufficientWords {
                required: count,
                available: words.len(),
            });
        }
        Ok(words.into_iter().take(count).collect())
    }

    /// Never fails; any lookup problem yields `None`.
    pub async fn fetch_single_word_details(&self, word: &str) -> Option<WordWithDetails> {
        match dictionary_api::get_word_details(
            self.transport.as_ref(),
            &self.endpoints.dictionary,
            word,
        )
        .await
        {
            Ok(details) => Some(details),
            Err(error) => {
                debug!(word, %error, "no details");
                None
            }
        }
    }

    /// Whether the dictionary has a pronunciation for `word`.
    pub async fn has_audio(&self, word: &str) -> bool {
        self.fetch_single_word_details(word)
            .await
            .is_some_and(|details| details.has_audio())
    }
}

fn playable(
    words: impl Iterator<Item = WordWithDetails>,
    limit: usize,
) -> Vec<WordWithDetails> {
    words
        .filter(|word| !word.word.is_empty() && word.has_audio())
        .take(limit)
        .collect()
}
