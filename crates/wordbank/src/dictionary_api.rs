use reqwest::Url;

use crate::transport::{get_json, parse_url, HttpRequest, Transport};
use crate::words::{DictionaryEntry, WordWithDetails};
use crate::{Result, WordBankError};

fn entry_url(base: &str, word: &str) -> Result<Url> {
    if word.trim().is_empty() {
        return Err(WordBankError::InvalidUrl(format!("{base}: empty word")));
    }
    let mut url = parse_url(base)?;
    url.path_segments_mut()
        .map_err(|()| WordBankError::InvalidUrl(format!("{base}: cannot append a word")))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_entry(
    transport: &dyn Transport,
    base: &str,
    word: &str,
) -> Result<DictionaryEntry> {
    let url = entry_url(base, word)?;
    let entries: Vec<DictionaryEntry> = get_json(transport, HttpRequest::new(url)).await?;
    entries.into_iter().next().ok_or(WordBankError::NoData)
}

/// Looks `word` up and attaches whatever the entry offers to the word as
/// it was asked for.
pub(crate) async fn get_word_details(
    transport: &dyn Transport,
    base: &str,
    word: &str,
) -> Result<WordWithDetails> {
    let entry = get_entry(transport, base, word).await?;
    Ok(WordWithDetails {
        word: word.to_owned(),
        ..derive_details(&entry)
    })
}

/// Picks the first usable pronunciation, definition and example out of an
/// entry.
///
/// The definition is always the first one under the first meaning, while
/// the example is the first non-empty one anywhere, scanning meanings and
/// then their definitions in order. The word is the upstream headword,
/// which may be empty; [`get_word_details`] replaces it.
pub(crate) fn derive_details(entry: &DictionaryEntry) -> WordWithDetails {
    let audio_url = entry
        .phonetics
        .iter()
        .filter_map(|phonetic| phonetic.audio.as_deref())
        .find(|audio| !audio.is_empty())
        .map(str::to_owned);
    let definition = entry
        .meanings
        .first()
        .and_then(|meaning| meaning.definitions.first())
        .map(|definition| definition.definition.clone());
    let example_sentence = entry
        .meanings
        .iter()
        .flat_map(|meaning| &meaning.definitions)
        .filter_map(|definition| definition.example.as_deref())
        .find(|example| !example.is_empty())
        .map(str::to_owned);
    WordWithDetails {
        word: entry.word.clone(),
        audio_url,
        definition,
        example_sentence,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::mock::{entry, entry_url as mock_url, MockTransport, DICTIONARY};

    fn parse(value: serde_json::Value) -> DictionaryEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn skips_empty_audio() {
        let entry = parse(json!({
            "word": "x",
            "phonetics": [{"audio": ""}, {"text": "/x/"}, {"audio": "x.mp3"}],
            "meanings": []
        }));
        let details = derive_details(&entry);
        assert_eq!(details.audio_url.as_deref(), Some("x.mp3"));
        assert_eq!(details.definition, None);
        assert_eq!(details.example_sentence, None);
    }

    #[test]
    fn first_definition_but_first_present_example() {
        let entry = parse(json!({
            "word": "x",
            "phonetics": [],
            "meanings": [{"definitions": [
                {"definition": "a"},
                {"definition": "b", "example": "e1"}
            ]}]
        }));
        let details = derive_details(&entry);
        assert_eq!(details.definition.as_deref(), Some("a"));
        assert_eq!(details.example_sentence.as_deref(), Some("e1"));
        assert_eq!(details.audio_url, None);
    }

    #[test]
    fn example_scan_crosses_meanings() {
        let entry = parse(json!({
            "word": "bark",
            "meanings": [
                {"definitions": [{"definition": "tree skin", "example": ""}]},
                {"definitions": [{"definition": "dog sound", "example": "The dog barks."}]}
            ]
        }));
        let details = derive_details(&entry);
        assert_eq!(details.definition.as_deref(), Some("tree skin"));
        assert_eq!(details.example_sentence.as_deref(), Some("The dog barks."));
    }

    #[test]
    fn word_is_encoded_into_the_path() {
        let url = entry_url("http://dictionary.test/entries/en/", "ice cream").unwrap();
        assert_eq!(url.as_str(), "http://dictionary.test/entries/en/ice%20cream");
        assert!(matches!(
            entry_url(DICTIONARY, "  "),
            Err(WordBankError::InvalidUrl(_))
        ));
        assert!(matches!(
            entry_url("mailto:someone@example.com", "word"),
            Err(WordBankError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn blank_headword_is_replaced_by_the_requested_word() {
        let transport = MockTransport::new().json(
            mock_url("crane"),
            json!([{"word": "", "phonetics": [{"audio": "crane.mp3"}], "meanings": []}]),
        );
        let details = get_word_details(&transport, DICTIONARY, "crane")
            .await
            .unwrap();
        assert_eq!(details.word, "crane");
        assert!(details.has_audio());
    }

    #[tokio::test]
    async fn empty_entry_list_is_no_data() {
        let transport = MockTransport::new().json(mock_url("ghost"), json!([]));
        let result = get_entry(&transport, DICTIONARY, "ghost").await;
        assert!(matches!(result, Err(WordBankError::NoData)));
    }

    #[tokio::test]
    async fn details_keep_the_requested_word() {
        let transport =
            MockTransport::new().json(mock_url("Harbor"), entry("harbor", Some("harbor.mp3")));
        let details = get_word_details(&transport, DICTIONARY, "Harbor")
            .await
            .unwrap();
        assert_eq!(details.word, "Harbor");
        assert_eq!(details.definition.as_deref(), Some("meaning of harbor"));
        assert!(details.has_audio());
    }
}
