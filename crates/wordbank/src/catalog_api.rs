use tracing::debug;

use crate::transport::{get_json, parse_url, HttpRequest, Transport};
use crate::words::{CatalogResponse, RawCatalogItem};
use crate::{Result, WordBankError};

pub(crate) async fn get_catalog_words(
    transport: &dyn Transport,
    base: &str,
    count: usize,
    min_level: u32,
    max_level: u32,
    token: Option<&str>,
) -> Result<Vec<RawCatalogItem>> {
    let token = token
        .filter(|token| !token.is_empty())
        .ok_or(WordBankError::AuthenticationRequired)?;
    let mut url = parse_url(base)?;
    url.query_pairs_mut()
        .append_pair("minLevel", &min_level.to_string())
        .append_pair("maxLevel", &max_level.to_string())
        .append_pair("count", &count.to_string());

    let response: CatalogResponse =
        get_json(transport, HttpRequest::new(url).with_bearer(token)).await?;
    debug!(
        min_level = response.min_level,
        max_level = response.max_level,
        count = response.count,
        returned = response.words.len(),
        "catalog words"
    );
    Ok(response.words)
}
