// https://random-word-api.vercel.app/ - amount, length, first letter

use rand::seq::SliceRandom;
use reqwest::Url;
use tracing::{debug, warn};

use crate::transport::{get_json, parse_url, HttpRequest, Transport};
use crate::Result;

const MIN_WORDS_PER_LENGTH: usize = 3;
const EXTRA_WORDS_PER_LENGTH: usize = 5;

fn random_words_url(base: &str, count: usize, length: Option<usize>) -> Result<Url> {
    let mut url = parse_url(base)?;
    url.query_pairs_mut().append_pair("words", &count.to_string());
    if let Some(length) = length {
        url.query_pairs_mut().append_pair("length", &length.to_string());
    }
    Ok(url)
}

pub(crate) async fn get_random_words(
    transport: &dyn Transport,
    base: &str,
    count: usize,
    length: Option<usize>,
) -> Result<Vec<String>> {
    let url = random_words_url(base, count, length)?;
    get_json(transport, HttpRequest::new(url)).await
}

pub(crate) async fn get_random_words_in_range(
    transport: &dyn Transport,
    base: &str,
    count: usize,
    min_length: usize,
    max_length: usize,
) -> Result<Vec<String>> {
    parse_url(base)?;
    let (min_length, max_length) = if min_length <= max_length {
        (min_length, max_length)
    } else {
        (max_length, min_length)
    };
    let lengths = (max_length - min_length).saturating_add(1);
    let per_length = (count / lengths).max(MIN_WORDS_PER_LENGTH);

    let mut words = Vec::new();
    for length in min_length..=max_length {
        match get_random_words(
            transport,
            base,
            per_length.saturating_add(EXTRA_WORDS_PER_LENGTH),
            Some(length),
        )
        .await
        {
            Ok(batch) => {
                debug!(length, fetched = batch.len(), "random words");
                words.extend(batch);
            }
            Err(error) => warn!(length, %error, "skipping word length"),
        }
    }

    words.shuffle(&mut rand::thread_rng());
    words.truncate(count.saturating_mul(3));
    Ok(words)
}
