use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::dictionary_api::get_word_details;
use crate::transport::Transport;
use crate::words::WordWithDetails;
use crate::{Result, WordBankError};

/// Fans one dictionary lookup out per word and collects playable results
/// in the order they arrive.
///
/// Lookups that fail or come back without audio are dropped. Once
/// `target_count` results are in hand the remaining lookups are dropped
/// unfinished.
pub(crate) async fn enrich_words(
    transport: &dyn Transport,
    base: &str,
    words: Vec<String>,
    target_count: usize,
) -> Result<Vec<WordWithDetails>> {
    if target_count == 0 {
        return Ok(Vec::new());
    }

    let mut lookups: FuturesUnordered<_> = words
        .into_iter()
        .filter(|word| !word.trim().is_empty())
        .map(move |word| async move {
            let details = get_word_details(transport, base, &word).await;
            (word, details)
        })
        .collect();
    let issued = lookups.len();

    let mut found = Vec::with_capacity(target_count.min(issued));
    while let Some((word, details)) = lookups.next().await {
        match details {
            Ok(details) if details.has_audio() => {
                found.push(details);
                if found.len() == target_count {
                    break;
                }
            }
            Ok(_) => debug!(word, "no pronunciation audio"),
            Err(error) => warn!(word, %error, "word lookup failed"),
        }
    }
    let abandoned = lookups.len();
    drop(lookups);

    info!(issued, found = found.len(), abandoned, "enriched words");
    if found.is_empty() {
        return Err(WordBankError::NoAudioAvailable);
    }
    Ok(found)
}
